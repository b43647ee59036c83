use std::ffi::OsString;

/// Parses a boolean flag value: `1 t T TRUE true True` or `0 f F FALSE false False`.
pub fn parse_bool(value: &str) -> Result<bool, String> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        other => Err(format!("invalid boolean value '{other}'")),
    }
}

/// Rewrites single-dash spellings of the given long flags (`-verbose`, `-verbose=1`) to
/// their double-dash form. The program name is left alone, and so is everything from the
/// first non-flag word or `--` onwards.
pub fn normalize_single_dash<I, S>(args: I, long_flags: &[&str]) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut flags_done = false;
    args.into_iter()
        .enumerate()
        .map(|(index, arg)| {
            let arg: OsString = arg.into();
            if index == 0 || flags_done {
                return arg;
            }
            match arg.to_str() {
                Some("--") => {
                    flags_done = true;
                    arg
                }
                Some(text) if text.starts_with('-') && text != "-" => {
                    let name = text[1..].split('=').next().unwrap_or_default();
                    if !text.starts_with("--") && long_flags.contains(&name) {
                        OsString::from(format!("-{text}"))
                    } else {
                        arg
                    }
                }
                _ => {
                    flags_done = true;
                    arg
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use super::{normalize_single_dash, parse_bool};

    #[test]
    fn accepts_true_spellings() {
        for value in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(value), Ok(true), "{value}");
        }
    }

    #[test]
    fn accepts_false_spellings() {
        for value in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(value), Ok(false), "{value}");
        }
    }

    #[test]
    fn rejects_other_spellings() {
        for value in ["", "yes", "no", "tRuE", "2"] {
            assert!(parse_bool(value).is_err(), "{value}");
        }
    }

    #[test]
    fn rewrites_single_dash_long_flags() {
        let args = normalize_single_dash(
            ["signalforge", "-verbose=1", "--verbose", "-h", "-help", "x", "-verbose"],
            &["verbose", "help"],
        );
        let expected: Vec<OsString> = [
            "signalforge",
            "--verbose=1",
            "--verbose",
            "-h",
            "--help",
            "x",
            "-verbose",
        ]
        .into_iter()
        .map(OsString::from)
        .collect();
        assert_eq!(args, expected);
    }

    #[test]
    fn leaves_words_after_terminator() {
        let args = normalize_single_dash(["signalforge", "--", "-verbose"], &["verbose"]);
        assert_eq!(args[2], OsString::from("-verbose"));
    }
}
