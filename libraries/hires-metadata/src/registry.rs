/// Extension-keyed parser registry
use crate::error::ParseFailure;
use crate::flac::FlacParser;
use crate::parser::MetadataParser;
use hires_core::TrackMetadata;
use std::collections::HashMap;
use std::path::Path;

/// Result of handing one path to the registry
///
/// `Skipped` is not an error: it means no parser claims the file's extension
/// and the caller should move on silently.
#[derive(Debug)]
pub enum ParseOutcome {
    /// No parser registered for the extension
    Skipped,

    /// A parser handled the file successfully
    Parsed(TrackMetadata),

    /// A parser handled the file and failed
    Failed(ParseFailure),
}

impl ParseOutcome {
    /// Whether a parser claimed the file (parsed or failed)
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Skipped)
    }
}

impl From<Result<TrackMetadata, ParseFailure>> for ParseOutcome {
    fn from(result: Result<TrackMetadata, ParseFailure>) -> Self {
        match result {
            Ok(metadata) => Self::Parsed(metadata),
            Err(failure) => Self::Failed(failure),
        }
    }
}

/// Maps file extensions (with leading dot, case-sensitive) to parsers
///
/// Registration happens once up front; lookups afterwards are read-only.
pub struct ParserRegistry {
    parsers: HashMap<String, Box<dyn MetadataParser>>,
}

impl ParserRegistry {
    /// Create a registry with the built-in FLAC parser registered
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(FlacParser::new());
        registry
    }

    /// Create a registry with no parsers
    pub fn empty() -> Self {
        Self {
            parsers: HashMap::new(),
        }
    }

    /// Register a parser under its declared extension
    ///
    /// A parser registered later for the same extension replaces the earlier one.
    pub fn register<P: MetadataParser + 'static>(&mut self, parser: P) {
        self.parsers
            .insert(parser.extension().to_string(), Box::new(parser));
    }

    /// Registered extensions, sorted
    pub fn extensions(&self) -> Vec<&str> {
        let mut extensions: Vec<&str> = self.parsers.keys().map(String::as_str).collect();
        extensions.sort_unstable();
        extensions
    }

    /// Whether a parser is registered for the path's extension
    pub fn is_supported(&self, path: &Path) -> bool {
        self.parser_for(path).is_some()
    }

    /// Parse `path` with the parser registered for its extension
    ///
    /// The parser's result is passed through unchanged.
    pub fn parse_file(&self, path: &Path) -> ParseOutcome {
        match self.parser_for(path) {
            Some(parser) => parser.parse_file(path).into(),
            None => ParseOutcome::Skipped,
        }
    }

    fn parser_for(&self, path: &Path) -> Option<&dyn MetadataParser> {
        let extension = path.extension()?.to_str()?;
        self.parsers
            .get(&format!(".{extension}"))
            .map(|parser| parser.as_ref())
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}
