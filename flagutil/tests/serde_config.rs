//! Loading flag values from serde-backed configuration layers.

use anyhow::{Result, anyhow, ensure};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use flagutil::{Duration, NetworkAddresses, Url};
use rstest::rstest;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize, Serialize)]
struct ServerConfig {
    addrs: NetworkAddresses,
    #[serde(default)]
    upstream: Url,
    #[serde(default)]
    timeout: Duration,
}

fn with_jail<F>(f: F) -> Result<()>
where
    F: FnOnce(&mut figment::Jail) -> Result<()>,
{
    figment::Jail::try_with(|j| f(j).map_err(|err| figment::Error::from(err.to_string())))
        .map_err(|err| anyhow!(err))
}

#[rstest]
#[case::delimited(r#"addrs = "a:4000,b:5000""#)]
#[case::sequence(r#"addrs = ["a:4000", "b:5000"]"#)]
fn extracts_address_list_from_toml(#[case] toml: &str) -> Result<()> {
    let cfg: ServerConfig = Figment::from(Toml::string(toml)).extract()?;
    ensure!(
        cfg.addrs.to_strings() == ["a:4000", "b:5000"],
        "unexpected addresses {:?}",
        cfg.addrs
    );
    ensure!(!cfg.upstream.is_valid(), "upstream should stay unset");
    ensure!(!cfg.timeout.is_valid(), "timeout should stay unset");
    Ok(())
}

#[test]
fn sequence_entries_are_not_split() -> Result<()> {
    let toml = r#"addrs = ["a:4000,b:5000"]"#;
    match Figment::from(Toml::string(toml)).extract::<ServerConfig>() {
        Ok(cfg) => Err(anyhow!("expected failure, got {cfg:?}")),
        Err(err) => {
            let rendered = err.to_string();
            ensure!(
                rendered.contains("address a:4000,b:5000"),
                "unexpected error {rendered}"
            );
            Ok(())
        }
    }
}

#[test]
fn rejects_invalid_elements() -> Result<()> {
    let toml = r#"addrs = "a:4000,foo""#;
    match Figment::from(Toml::string(toml)).extract::<ServerConfig>() {
        Ok(cfg) => Err(anyhow!("expected failure, got {cfg:?}")),
        Err(err) => {
            let rendered = err.to_string();
            ensure!(
                rendered.contains("address foo: missing port in address"),
                "unexpected error {rendered}"
            );
            Ok(())
        }
    }
}

#[test]
fn extracts_scalars() -> Result<()> {
    let toml = r#"
        addrs = "a:4000"
        upstream = "https://google.com"
        timeout = "1m"
    "#;
    let cfg: ServerConfig = Figment::from(Toml::string(toml)).extract()?;
    ensure!(cfg.upstream.to_string() == "https://google.com");
    ensure!(cfg.timeout.as_duration() == Some(std::time::Duration::from_secs(60)));
    Ok(())
}

#[test]
fn environment_overrides_toml() -> Result<()> {
    with_jail(|j| {
        j.set_env("APP_TIMEOUT", "30s");
        let cfg: ServerConfig = Figment::from(Toml::string(r#"addrs = "a:4000""#))
            .merge(Env::prefixed("APP_"))
            .extract()?;
        ensure!(cfg.timeout.as_duration() == Some(std::time::Duration::from_secs(30)));
        Ok(())
    })
}

#[test]
fn serialized_values_survive_a_figment_round_trip() -> Result<()> {
    let original = ServerConfig {
        addrs: "a:4000,b:5000".parse()?,
        upstream: "https://google.com".parse()?,
        timeout: "10s".parse()?,
    };
    let cfg: ServerConfig = Figment::from(Serialized::defaults(&original)).extract()?;
    ensure!(cfg.addrs == original.addrs);
    ensure!(cfg.upstream.to_string() == "https://google.com");
    ensure!(cfg.timeout.as_duration() == Some(std::time::Duration::from_secs(10)));
    Ok(())
}

#[test]
fn serializes_to_rendered_strings() -> Result<()> {
    let cfg = ServerConfig {
        addrs: "a:4000,b:5000".parse()?,
        ..ServerConfig::default()
    };
    let value = serde_json::to_value(&cfg)?;
    ensure!(
        value == serde_json::json!({
            "addrs": "a:4000,b:5000",
            "upstream": null,
            "timeout": null,
        }),
        "unexpected JSON {value}"
    );
    let back: ServerConfig = serde_json::from_value(value)?;
    ensure!(back.addrs == cfg.addrs);
    ensure!(!back.upstream.is_valid());
    Ok(())
}
