use std::env;
use stream_client::utils::config::{get_env_flag, get_env_or_default};

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("SC_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("SC_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("SC_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("SC_MISSING_VAR");
        let result: String = get_env_or_default("SC_MISSING_VAR", "default".to_string());
        assert_eq!(result, "default");
    }
}

#[test]
fn test_get_env_or_default_with_integer() {
    unsafe {
        env::set_var("SC_TEST_VAR_INT", " 42 ");
        let result: u64 = get_env_or_default("SC_TEST_VAR_INT", 0);
        assert_eq!(result, 42);
        env::remove_var("SC_TEST_VAR_INT");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("SC_TEST_VAR_INVALID", "not_a_number");
        let result: u64 = get_env_or_default("SC_TEST_VAR_INVALID", 99);
        assert_eq!(result, 99);
        env::remove_var("SC_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_flag_variants() {
    unsafe {
        for (raw, expected) in [
            ("true", true),
            ("YES", true),
            ("1", true),
            ("False", false),
            ("0", false),
            ("no", false),
        ] {
            env::set_var("SC_TEST_FLAG", raw);
            assert_eq!(get_env_flag("SC_TEST_FLAG", !expected), expected, "value {raw}");
        }
        env::remove_var("SC_TEST_FLAG");
    }
}

#[test]
fn test_get_env_flag_invalid_or_missing_uses_default() {
    unsafe {
        env::set_var("SC_TEST_FLAG_INVALID", "maybe");
        assert!(get_env_flag("SC_TEST_FLAG_INVALID", true));
        assert!(!get_env_flag("SC_TEST_FLAG_INVALID", false));
        env::remove_var("SC_TEST_FLAG_INVALID");

        env::remove_var("SC_TEST_FLAG_MISSING");
        assert!(get_env_flag("SC_TEST_FLAG_MISSING", true));
    }
}
