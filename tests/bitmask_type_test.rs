//! Integration tests for the bit mask column type
//!
//! Covers column declarations per size hint, the lenient write path and the
//! read path from raw database values.

use bitflags::bitflags;
use typehaus::prelude::*;

bitflags! {
    /// Flag table used across these tests
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CustomFlags: u64 {
        const FIRST = 1 << 0;
        const SECOND = 1 << 1;
        const THIRD = 1 << 2;
        const FIRST_AND_THIRD = Self::FIRST.bits() | Self::THIRD.bits();
    }
}

type CustomBitMask = BitMask<CustomFlags>;

fn custom_type() -> BitMaskType<CustomFlags> {
    BitMaskType::new("custom_bitmask_type")
}

#[test]
fn test_convert_to_database_value() {
    let platform = MySqlPlatform::new();
    let cases: Vec<(&str, Option<Box<dyn ColumnValue>>, DbValue)> = vec![
        ("Non-BitMask (integer) should return 0", Some(Box::new(1234i64) as Box<dyn ColumnValue>), DbValue::Integer(0)),
        ("Non-BitMask (string) should return 0", Some(Box::new("testtest") as Box<dyn ColumnValue>), DbValue::Integer(0)),
        ("Null should return 0", None, DbValue::Integer(0)),
        (
            "Raw BitMask (123) should return the bits provided",
            Some(Box::new(RawBitMask::new(123)) as Box<dyn ColumnValue>),
            DbValue::Integer(123),
        ),
        (
            "BitMask (123) should return the bits provided",
            Some(Box::new(CustomBitMask::new(123)) as Box<dyn ColumnValue>),
            DbValue::Integer(123),
        ),
        (
            "BitMask (321) should return the bits provided",
            Some(Box::new(CustomBitMask::new(321)) as Box<dyn ColumnValue>),
            DbValue::Integer(321),
        ),
    ];

    for (name, value, expected) in cases {
        let stored = custom_type()
            .convert_to_database_value(value.as_deref(), &platform)
            .unwrap();
        assert_eq!(stored, expected, "{}", name);
    }
}

#[test]
fn test_convert_to_rust_value() {
    let platform = MySqlPlatform::new();
    let cases = [
        ("NULL should be converted to zero bitmask", DbValue::Null, 0),
        ("Non-numeric should be converted to zero bitmask", DbValue::Text("asdtest".into()), 0),
        ("Integer should keep its bits", DbValue::Integer(123), 123),
        ("Numeric string should keep its bits", DbValue::Text("1234".into()), 1234),
        ("Float should be truncated", DbValue::Float(7.9), 7),
        ("Timestamp is not numeric", DbValue::Timestamp(chrono::DateTime::from_timestamp(0, 0).unwrap().fixed_offset()), 0),
    ];

    for (name, raw, expected_bits) in cases {
        let value = custom_type().convert_to_rust_value(raw, &platform).unwrap();
        assert_eq!(value.map(|v| v.bits()), Some(expected_bits), "{}", name);
    }
}

#[test]
fn test_round_trip() -> anyhow::Result<()> {
    let platform = PostgresPlatform::new();
    let column_type = custom_type();

    for bits in [0, 1, 123, 65_535, 4_294_967_296, u64::MAX - 1, u64::MAX] {
        let mask = CustomBitMask::new(bits);
        let stored = column_type.convert_to_database_value(Some(&mask), &platform)?;
        let loaded = column_type.convert_to_rust_value(stored, &platform)?;
        assert_eq!(loaded, Some(mask), "bits: {}", bits);
    }

    Ok(())
}

#[test]
fn test_named_flags_survive_round_trip() -> anyhow::Result<()> {
    let platform = MySqlPlatform::new();
    let column_type = custom_type();

    let mut mask = CustomBitMask::default();
    mask.set(CustomFlags::FIRST_AND_THIRD).toggle(CustomFlags::SECOND);

    let stored = column_type.convert_to_database_value(Some(&mask), &platform)?;
    assert_eq!(stored, DbValue::Integer(0b111));

    let loaded = column_type
        .convert_to_rust_value(stored, &platform)?
        .expect("bit masks are never null");
    assert!(loaded.check(CustomFlags::SECOND));
    assert!(loaded.check(CustomFlags::FIRST_AND_THIRD));

    Ok(())
}

#[test]
fn test_full_width_mask_fits_postgres_bigint_column() {
    let platform = PostgresPlatform::new();
    let column_type = custom_type();
    let column = ColumnSpec::new("flags").with_field_type("BIGINT");

    assert_eq!(
        column_type.sql_declaration(&column, &platform).unwrap(),
        "NUMERIC(20,0) NOT NULL"
    );

    let mask = CustomBitMask::new(u64::MAX);
    let stored = column_type
        .convert_to_database_value(Some(&mask), &platform)
        .unwrap();
    assert_eq!(stored, DbValue::Unsigned(u64::MAX));

    let param = bind_param(&stored, column_type.binding_type(), &platform).unwrap();
    match param {
        BindParam::Numeric(value) => assert_eq!(value.to_string(), "18446744073709551615"),
        other => panic!("Expected Numeric, got {:?}", other),
    }

    // NUMERIC reads come back as decimal text
    let loaded = column_type
        .convert_to_rust_value(DbValue::Text("18446744073709551615".into()), &platform)
        .unwrap();
    assert_eq!(loaded, Some(mask));
}

#[test]
fn test_sql_declaration_per_size_hint() {
    let platform = MySqlPlatform::new();
    let cases = [
        (None, "SMALLINT UNSIGNED NOT NULL"),
        (Some("SMALLINT"), "SMALLINT UNSIGNED NOT NULL"),
        (Some("INT"), "INT UNSIGNED NOT NULL"),
        (Some("BIGINT"), "BIGINT UNSIGNED NOT NULL"),
    ];

    for (hint, expected) in cases {
        let mut column = ColumnSpec::new("flags");
        column.field_type = hint.map(str::to_string);

        let sql = custom_type().sql_declaration(&column, &platform).unwrap();
        assert_eq!(sql, expected, "hint: {:?}", hint);
    }
}

#[test]
fn test_unsupported_size_hint() {
    let column = ColumnSpec::new("flags").with_field_type("TINYINT");
    let err = custom_type()
        .sql_declaration(&column, &MySqlPlatform::new())
        .unwrap_err();

    assert!(err.is_configuration_error());
    assert_eq!(err.to_string(), "Field type TINYINT not supported");
}

#[test]
fn test_framework_metadata() {
    let platform = PostgresPlatform::new();
    let column_type = custom_type();

    assert_eq!(column_type.name(), "custom_bitmask_type");
    assert_eq!(column_type.binding_type(), BindingType::Integer);
    assert!(column_type.requires_sql_comment_hint(&platform));
    assert_eq!(
        column_type.sql_comment_hint(&platform).as_deref(),
        Some("(Type:custom_bitmask_type)")
    );
}

#[test]
fn test_configured_platform_and_default_size() -> anyhow::Result<()> {
    let config = TypesConfig::from_toml_str(
        r#"
        [platform]
        kind = "mysql"

        [bitmask]
        default_size = "INT"
        "#,
    )?;

    let platform = platform_from_config(&config.platform);
    let column_type = BitMaskType::<CustomFlags>::from_config("custom_bitmask_type", &config.bitmask)?;

    let sql = column_type.sql_declaration(&ColumnSpec::new("flags"), platform.as_ref())?;
    assert_eq!(sql, "INT UNSIGNED NOT NULL");

    // An explicit hint still wins over the configured default
    let column = ColumnSpec::new("flags").with_field_type("SMALLINT");
    let sql = column_type.sql_declaration(&column, platform.as_ref())?;
    assert_eq!(sql, "SMALLINT UNSIGNED NOT NULL");

    Ok(())
}
