use std::fmt;

/// Status of a translation, taken from the `type` attribute of `<translation>`.
///
/// A missing attribute means the translator marked the entry as done.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TranslationStatus {
    #[default]
    Finished,
    Unfinished,
    /// Source string no longer exists in the code base.
    Obsolete,
    /// Newer tooling spelling of `Obsolete`.
    Vanished,
}

impl TranslationStatus {
    /// Parse the `type` attribute. `None` means the attribute was absent.
    pub fn from_attr(value: Option<&str>) -> Option<Self> {
        match value {
            None => Some(Self::Finished),
            Some("unfinished") => Some(Self::Unfinished),
            Some("obsolete") => Some(Self::Obsolete),
            Some("vanished") => Some(Self::Vanished),
            Some(_) => None,
        }
    }

    /// The attribute value to write back, `None` for finished translations.
    pub fn as_attr(self) -> Option<&'static str> {
        match self {
            Self::Finished => None,
            Self::Unfinished => Some("unfinished"),
            Self::Obsolete => Some("obsolete"),
            Self::Vanished => Some("vanished"),
        }
    }

    pub fn is_stale(self) -> bool {
        matches!(self, Self::Obsolete | Self::Vanished)
    }
}

impl fmt::Display for TranslationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_attr().unwrap_or("finished"))
    }
}

/// The `line` attribute of a `<location>` element as it was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRef {
    /// `line="476"`
    Absolute(usize),
    /// `line="+1"` or `line="-90"`, relative to the previous line seen for the same file.
    Relative(i64),
}

/// Advisory provenance of a message: a source file and a line.
///
/// Hints are stored exactly as they appear in the catalog. Use
/// [`crate::core::locations::LocationResolver`] to turn them into absolute positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationHint {
    /// `None` when the hint inherits the previously named file.
    pub filename: Option<String>,
    pub line: Option<LineRef>,
}

impl LocationHint {
    pub fn new(filename: Option<&str>, line: Option<LineRef>) -> Self {
        Self {
            filename: filename.map(str::to_string),
            line,
        }
    }
}

/// Translated text of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    Singular(String),
    /// One entry per `<numerusform>`, in plural-form order.
    Plural(Vec<String>),
}

impl Translation {
    /// Singular text, or the first plural form.
    pub fn text(&self) -> &str {
        match self {
            Translation::Singular(text) => text,
            Translation::Plural(forms) => forms.first().map(String::as_str).unwrap_or(""),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Translation::Singular(text) => text.is_empty(),
            Translation::Plural(forms) => forms.iter().all(String::is_empty),
        }
    }

    /// Every text, one per plural form. Empty forms are included.
    pub fn texts(&self) -> Vec<&str> {
        match self {
            Translation::Singular(text) => vec![text.as_str()],
            Translation::Plural(forms) => forms.iter().map(String::as_str).collect(),
        }
    }
}

impl Default for Translation {
    fn default() -> Self {
        Translation::Singular(String::new())
    }
}

/// Position of a message's `<source>` element inside the `.ts` file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourcePosition {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed, in characters).
    pub col: usize,
}

/// One translatable string and its rendering for the catalog's locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    /// Optional `id` attribute.
    pub id: Option<String>,
    /// Original-language text; the lookup key.
    pub source: String,
    /// Previous source text kept by tooling after the source changed.
    pub old_source: Option<String>,
    /// Disambiguation comment, part of the lookup key.
    pub comment: Option<String>,
    pub old_comment: Option<String>,
    pub extra_comment: Option<String>,
    pub translator_comment: Option<String>,
    pub locations: Vec<LocationHint>,
    pub translation: Translation,
    pub status: TranslationStatus,
    pub numerus: bool,
    /// Other `<message>` attributes (e.g. `utf8`), in file order.
    pub attributes: Vec<(String, String)>,
    /// Unmodelled child elements (`<userdata>`, `<extra-*>`), kept as raw XML.
    pub extra_elements: Vec<String>,
    pub position: SourcePosition,
}

impl Message {
    pub fn new(source: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            translation: Translation::Singular(translation.into()),
            ..Default::default()
        }
    }

    pub fn with_status(mut self, status: TranslationStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn is_stale(&self) -> bool {
        self.status.is_stale()
    }

    pub fn is_finished(&self) -> bool {
        self.status == TranslationStatus::Finished
    }

    pub fn translation_text(&self) -> &str {
        self.translation.text()
    }

    /// Disambiguation comment, with an empty comment treated as absent.
    pub fn disambiguation(&self) -> Option<&str> {
        self.comment.as_deref().filter(|c| !c.is_empty())
    }
}

/// A named group of related messages, typically a command or dialog class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    pub name: String,
    pub comment: Option<String>,
    /// Unmodelled child elements, kept as raw XML.
    pub extra_elements: Vec<String>,
    pub messages: Vec<Message>,
}

impl Context {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }
}

/// How a catalog writes the `line` attribute of its locations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LocationStyle {
    #[default]
    None,
    Absolute,
    Relative,
}

/// All contexts and messages for one target locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Path the catalog was read from.
    pub file_path: String,
    pub version: Option<String>,
    /// Target locale, e.g. `zh-TW`.
    pub language: Option<String>,
    pub source_language: Option<String>,
    /// Unmodelled top-level elements such as `<dependencies>`, kept as raw XML.
    pub extra_elements: Vec<String>,
    pub contexts: Vec<Context>,
    pub location_style: LocationStyle,
}

impl Catalog {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            ..Default::default()
        }
    }

    /// Iterate `(context, message)` pairs in file order.
    pub fn messages(&self) -> impl Iterator<Item = (&Context, &Message)> {
        self.contexts
            .iter()
            .flat_map(|ctx| ctx.messages.iter().map(move |msg| (ctx, msg)))
    }

    pub fn find_context(&self, name: &str) -> Option<&Context> {
        self.contexts.iter().find(|ctx| ctx.name == name)
    }

    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|ctx| ctx.messages.len()).sum()
    }

    /// Target language, or `"?"` when the catalog does not declare one.
    pub fn language_or_unknown(&self) -> &str {
        self.language.as_deref().unwrap_or("?")
    }
}
