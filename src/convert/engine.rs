//! Engine resolution and invocation.
//!
//! | Engine        | Invocation                                                  |
//! |---------------|-------------------------------------------------------------|
//! | `weasyprint`  | `weasyprint <html> <pdf>`                                   |
//! | `wkhtmltopdf` | `wkhtmltopdf --quiet --enable-local-file-access <html> <pdf>` |
//! | `chromium`    | `<browser> --headless --print-to-pdf=<pdf> <file-url>`       |
//! | `command`     | `convert.command` with `{input}` / `{output}` substituted   |

use super::ConvertError;
use crate::config::{ConvertConfig, Engine};
use crate::utils::exec::{Cmd, EMPTY_FILTER, FilterRule, SILENT_FILTER};
use std::path::{Path, PathBuf};

/// weasyprint reports every unsupported CSS property as a warning.
const WEASYPRINT_FILTER: FilterRule = FilterRule::new(&["WARNING:"]);

/// A concrete engine bound to an executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub engine: Engine,
    pub program: PathBuf,
}

impl Resolved {
    /// Short name for status lines.
    pub fn label(&self) -> String {
        match self.engine {
            Engine::Command => self
                .program
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.program.display().to_string()),
            engine => engine.name().to_string(),
        }
    }
}

/// Find the executable for the configured engine.
pub fn resolve(config: &ConvertConfig) -> Result<Resolved, ConvertError> {
    resolve_with(config, |program| which::which(program).ok())
}

/// [`resolve`] with an injectable lookup.
pub fn resolve_with(
    config: &ConvertConfig,
    lookup: impl Fn(&str) -> Option<PathBuf>,
) -> Result<Resolved, ConvertError> {
    let find = |engine: Engine| {
        engine
            .programs()
            .iter()
            .find_map(|p| lookup(p))
            .map(|program| Resolved { engine, program })
    };

    match config.engine {
        Engine::Auto => Engine::PROBE_ORDER
            .into_iter()
            .find_map(find)
            .ok_or_else(|| ConvertError::NoEngine {
                tried: Engine::PROBE_ORDER
                    .iter()
                    .flat_map(|e| e.programs().iter().copied())
                    .collect(),
            }),
        Engine::Command => {
            let program = config.command.first().ok_or(ConvertError::EmptyCommand)?;
            Ok(Resolved {
                engine: Engine::Command,
                program: lookup(program).unwrap_or_else(|| PathBuf::from(program)),
            })
        }
        engine => find(engine).ok_or(ConvertError::NotInstalled(engine.name())),
    }
}

/// Build the command that prints `html` into `pdf`.
pub fn invocation(resolved: &Resolved, config: &ConvertConfig, html: &Path, pdf: &Path) -> Cmd {
    let cmd = Cmd::new(&resolved.program);
    let cmd = match resolved.engine {
        Engine::Weasyprint => cmd.arg(html).arg(pdf).filter(&WEASYPRINT_FILTER),
        Engine::Wkhtmltopdf => cmd
            .args(["--quiet", "--enable-local-file-access"])
            .arg(html)
            .arg(pdf)
            .filter(&EMPTY_FILTER),
        Engine::Chromium => {
            let mut print_to = std::ffi::OsString::from("--print-to-pdf=");
            print_to.push(pdf);
            cmd.args(["--headless", "--disable-gpu", "--no-pdf-header-footer"])
                .arg(print_to)
                .arg(file_url(html))
                .filter(&SILENT_FILTER)
        }
        Engine::Command | Engine::Auto => cmd
            .args(substitute(config.command.get(1..).unwrap_or_default(), html, pdf))
            .filter(&EMPTY_FILTER),
    };

    match html.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => cmd.cwd(dir),
        _ => cmd,
    }
}

/// Substitute `{input}` and `{output}` in user command arguments.
fn substitute(args: &[String], html: &Path, pdf: &Path) -> Vec<String> {
    let input = html.to_string_lossy();
    let output = pdf.to_string_lossy();
    args.iter()
        .map(|arg| {
            arg.replace(ConvertConfig::INPUT_PLACEHOLDER, &input)
                .replace(ConvertConfig::OUTPUT_PLACEHOLDER, &output)
        })
        .collect()
}

/// `file://` URL for a local path (browsers take URLs, not paths).
fn file_url(path: &Path) -> String {
    url::Url::from_file_path(path)
        .map(String::from)
        .unwrap_or_else(|()| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(engine: Engine, command: &[&str]) -> ConvertConfig {
        ConvertConfig {
            enable: true,
            engine,
            command: command.iter().map(ToString::to_string).collect(),
        }
    }

    fn only(installed: &'static [&'static str]) -> impl Fn(&str) -> Option<PathBuf> {
        move |p| installed.contains(&p).then(|| PathBuf::from("/usr/bin").join(p))
    }

    #[test]
    fn test_auto_prefers_weasyprint() {
        let resolved =
            resolve_with(&config(Engine::Auto, &[]), only(&["wkhtmltopdf", "weasyprint"])).unwrap();
        assert_eq!(resolved.engine, Engine::Weasyprint);
        assert_eq!(resolved.program, PathBuf::from("/usr/bin/weasyprint"));
    }

    #[test]
    fn test_auto_falls_back_to_browser() {
        let resolved = resolve_with(&config(Engine::Auto, &[]), only(&["google-chrome"])).unwrap();
        assert_eq!(resolved.engine, Engine::Chromium);
        assert_eq!(resolved.label(), "chromium");
    }

    #[test]
    fn test_auto_nothing_installed() {
        let err = resolve_with(&config(Engine::Auto, &[]), only(&[])).unwrap_err();
        match err {
            ConvertError::NoEngine { tried } => {
                assert_eq!(tried[0], "weasyprint");
                assert!(tried.contains(&"chromium"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_explicit_engine_missing() {
        let err = resolve_with(&config(Engine::Wkhtmltopdf, &[]), only(&["weasyprint"])).unwrap_err();
        assert!(matches!(err, ConvertError::NotInstalled("wkhtmltopdf")));
    }

    #[test]
    fn test_command_engine() {
        let cfg = config(Engine::Command, &["pandoc", "{input}", "-o", "{output}"]);
        let resolved = resolve_with(&cfg, only(&[])).unwrap();
        assert_eq!(resolved.program, PathBuf::from("pandoc"));
        assert_eq!(resolved.label(), "pandoc");

        let err = resolve_with(&config(Engine::Command, &[]), only(&[])).unwrap_err();
        assert!(matches!(err, ConvertError::EmptyCommand));
    }

    #[test]
    fn test_substitute_placeholders() {
        let args = vec!["{input}".to_string(), "--out={output}".to_string(), "-q".to_string()];
        let out = substitute(&args, Path::new("/cv/r.html"), Path::new("/cv/.r.pdf.tmp"));
        assert_eq!(out, ["/cv/r.html", "--out=/cv/.r.pdf.tmp", "-q"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_file_url() {
        assert_eq!(file_url(Path::new("/cv/my resume.html")), "file:///cv/my%20resume.html");
    }
}
