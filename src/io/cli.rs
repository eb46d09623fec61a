//! Command-line interface for generating a pattern document

use crate::io::configuration::{DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_SIZE, DEFAULT_SPACING};
use crate::io::error::Result;
use crate::io::json::write_pretty;
use crate::io::numeric::{parse_integer, parse_real, strict_integer, strict_real};
use crate::pattern::{PatternConfig, generate};
use clap::{Command, CommandFactory, Parser};
use std::ffi::{OsStr, OsString};
use std::io::Write;

#[derive(Parser, Debug)]
#[command(name = "rhombitile")]
#[command(
    author,
    version,
    about = "Dump rhombus tiling geometry as JSON",
    args_override_self = true
)]
/// Command-line arguments for the pattern generator
// Numeric options stay raw text so malformed values never abort parsing
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Number of block rows
    #[arg(long, value_name = "INT")]
    pub rows: Option<String>,

    /// Number of block columns
    #[arg(long, value_name = "INT")]
    pub cols: Option<String>,

    /// Base tile size
    #[arg(long, value_name = "REAL")]
    pub size: Option<String>,

    /// Spacing multiplier applied to the tile size
    #[arg(long, value_name = "REAL")]
    pub spacing: Option<String>,

    /// Include palette colors in the document and on every square
    #[arg(long)]
    pub colors: bool,

    /// Reject malformed or non-positive numbers instead of emitting them
    #[arg(long)]
    pub strict: bool,

    /// Print a generation summary to stderr
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse arguments, ignoring anything the command does not define
    ///
    /// Value options are only recognized as `--name=value`; a bare `--name`,
    /// unknown options and positional arguments are dropped before parsing.
    pub fn parse_lenient<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(Self::known_arguments(args))
    }

    /// Filter `args` down to the program name and recognized options
    pub fn known_arguments<I, T>(args: I) -> Vec<OsString>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut command = Self::command();
        command.build();

        let mut args = args.into_iter().map(Into::into);
        let mut known: Vec<OsString> = args.next().into_iter().collect();
        known.extend(args.filter(|arg| is_known(&command, arg)));
        known
    }

    /// Resolve option text into a generation configuration
    ///
    /// Absent or empty options take their defaults. Without `--strict`,
    /// malformed numbers are read permissively and never fail.
    ///
    /// # Errors
    ///
    /// With `--strict`, returns `InvalidParameter` for any value that is not
    /// a complete, finite, positive number
    pub fn pattern_config(&self) -> Result<PatternConfig> {
        Ok(PatternConfig {
            rows: self.integer_option("rows", self.rows.as_deref(), DEFAULT_ROWS)?,
            cols: self.integer_option("cols", self.cols.as_deref(), DEFAULT_COLS)?,
            size: self.real_option("size", self.size.as_deref(), DEFAULT_SIZE)?,
            spacing: self.real_option("spacing", self.spacing.as_deref(), DEFAULT_SPACING)?,
            include_colors: self.colors,
        })
    }

    /// Generate the configured pattern and write it to `writer`
    ///
    /// # Errors
    ///
    /// Returns an error if strict validation rejects an option or the
    /// document cannot be written
    // Allow print for user feedback on the generated grid
    #[allow(clippy::print_stderr)]
    pub fn run<W: Write>(&self, writer: W) -> Result<()> {
        let config = self.pattern_config()?;
        let document = generate(&config);
        write_pretty(writer, &document)?;

        if self.verbose {
            let (rows, cols) = document.dimensions();
            eprintln!(
                "Generated {} blocks ({rows}x{cols}), scaled size {}",
                document.block_count(),
                document.scaled_size
            );
        }

        Ok(())
    }

    fn integer_option(
        &self,
        parameter: &'static str,
        value: Option<&str>,
        default: i64,
    ) -> Result<Option<i64>> {
        match value.filter(|text| !text.is_empty()) {
            None => Ok(Some(default)),
            Some(text) if self.strict => strict_integer(parameter, text).map(Some),
            Some(text) => Ok(parse_integer(text)),
        }
    }

    fn real_option(&self, parameter: &'static str, value: Option<&str>, default: f64) -> Result<f64> {
        match value.filter(|text| !text.is_empty()) {
            None => Ok(default),
            Some(text) if self.strict => strict_real(parameter, text),
            Some(text) => Ok(parse_real(text)),
        }
    }
}

/// Whether `arg` names an option of `command` in a form it accepts
fn is_known(command: &Command, arg: &OsStr) -> bool {
    let Some(text) = arg.to_str() else {
        return false;
    };

    if let Some(option) = text.strip_prefix("--") {
        let (name, has_value) = match option.split_once('=') {
            Some((name, _)) => (name, true),
            None => (option, false),
        };
        return command
            .get_arguments()
            .find(|candidate| candidate.get_long() == Some(name))
            .is_some_and(|candidate| candidate.get_action().takes_values() == has_value);
    }

    // Short flags such as -h and -V
    let mut chars = text.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some('-'), Some(short), None) => command.get_arguments().any(|candidate| {
            candidate.get_short() == Some(short) && !candidate.get_action().takes_values()
        }),
        _ => false,
    }
}
