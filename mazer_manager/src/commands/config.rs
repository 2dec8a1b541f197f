use super::MazeArgs;
use anyhow::Result;
use std::io::Write;

/// Print the effective configuration as TOML
pub fn show_config<W: Write>(args: &MazeArgs, out: &mut W) -> Result<()> {
    let config = args.resolve()?;
    write!(out, "{}", config.to_toml_string()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazer_core::MazeConfig;

    #[test]
    fn test_output_parses_back() {
        let args = MazeArgs {
            width: Some(15),
            seed: Some(2),
            ..MazeArgs::default()
        };
        let mut out = Vec::new();
        show_config(&args, &mut out).unwrap();

        let parsed = MazeConfig::from_toml_str(&String::from_utf8(out).unwrap()).unwrap();
        assert_eq!(parsed.width, 15);
        assert_eq!(parsed.seed, Some(2));
    }
}
