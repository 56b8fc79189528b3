//! Config load validation tests for eval-sweep-core.
// crates/eval-sweep-core/tests/config_load.rs
// =============================================================================
// Module: Config Load Validation Tests
// Description: Validate config defaults and load guards (size, encoding,
//              schema).
// Purpose: Ensure config input handling is strict and fail-closed.
// =============================================================================

use std::io::Write;
use std::path::Path;

use eval_sweep_core::ConfigError;
use eval_sweep_core::HarnessConfig;
use tempfile::NamedTempFile;

type TestResult = Result<(), String>;

fn assert_invalid(result: Result<HarnessConfig, ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err("expected invalid config load".to_string()),
    }
}

#[test]
fn defaults_match_original_layout() -> TestResult {
    let config = HarnessConfig::default();
    if config.engine_program != "cargo" {
        return Err("default engine program should be cargo".to_string());
    }
    if config.engine_args != ["run", "--release", "--"] {
        return Err("default engine args should select the release build".to_string());
    }
    if config.suites_root != Path::new("./test_suites") {
        return Err("default suites root mismatch".to_string());
    }
    if config.output_dir != Path::new("./data") {
        return Err("default output dir mismatch".to_string());
    }
    if config.toolchain_path.is_some() {
        return Err("toolchain path should default to unset".to_string());
    }
    Ok(())
}

#[test]
fn explicit_file_overrides_fields() -> TestResult {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    let body = concat!(
        "engine_program = \"/opt/engine/bin/engine\"\n",
        "engine_args = []\n",
        "suites_root = \"/srv/suites\"\n",
        "toolchain_path = \"/opt/toolchain/bin\"\n",
    );
    file.write_all(body.as_bytes()).map_err(|err| err.to_string())?;

    let config = HarnessConfig::load(Some(file.path())).map_err(|err| err.to_string())?;
    if config.engine_program != "/opt/engine/bin/engine" {
        return Err("engine program override not applied".to_string());
    }
    if !config.engine_args.is_empty() {
        return Err("engine args override not applied".to_string());
    }
    if config.suites_root != Path::new("/srv/suites") {
        return Err("suites root override not applied".to_string());
    }
    // Unset fields keep their defaults.
    if config.output_dir != Path::new("./data") {
        return Err("unset output dir should keep its default".to_string());
    }
    if config.toolchain_path.as_deref() != Some(Path::new("/opt/toolchain/bin")) {
        return Err("toolchain path override not applied".to_string());
    }
    Ok(())
}

#[test]
fn load_rejects_unknown_keys() -> TestResult {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(b"mystery_knob = 1\n").map_err(|err| err.to_string())?;
    assert_invalid(HarnessConfig::load(Some(file.path())), "invalid config file")?;
    Ok(())
}

#[test]
fn load_rejects_missing_explicit_file() -> TestResult {
    let path = Path::new("/nonexistent/eval-sweep.toml");
    assert_invalid(HarnessConfig::load(Some(path)), "failed to read config file")?;
    Ok(())
}

#[test]
fn load_rejects_oversized_file() -> TestResult {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    let payload = vec![b'#'; 64 * 1024 + 1];
    file.write_all(&payload).map_err(|err| err.to_string())?;
    assert_invalid(HarnessConfig::load(Some(file.path())), "config file exceeds size limit")?;
    Ok(())
}

#[test]
fn load_rejects_non_utf8_file() -> TestResult {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(&[0xFF, 0xFE, 0xFF]).map_err(|err| err.to_string())?;
    assert_invalid(HarnessConfig::load(Some(file.path())), "config file must be utf-8")?;
    Ok(())
}

#[test]
fn layout_lowering_copies_fields() -> TestResult {
    let config = HarnessConfig::default();
    let layout = config.layout();
    if layout.engine_program != config.engine_program
        || layout.engine_args != config.engine_args
        || layout.suites_root != config.suites_root
        || layout.output_dir != config.output_dir
    {
        return Err("layout does not mirror the configuration".to_string());
    }
    Ok(())
}
