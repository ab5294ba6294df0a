//! The closed vocabulary of editor plugin symbols.
//!
//! Every first-party capability the editor ships is identified by one
//! variant of [`Plugin`]. The enum is deliberately closed: adding a
//! capability means adding a variant here, which forces the dependency
//! tables and the name mapping to be revisited at compile time.
//!
//! Third-party and licensed capabilities are not part of the enum; they are
//! carried as free-form strings on a [`CustomPlugin`] descriptor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A first-party editor capability.
///
/// Identity is variant identity; the serialized form and [`Plugin::name`]
/// both use the editor-facing name (e.g. `"ImageCaption"`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Plugin {
    // Editing core
    Essentials,
    Paragraph,
    Clipboard,
    DragDrop,
    Enter,
    ShiftEnter,
    Typing,
    Undo,
    SelectAll,
    Autoformat,
    Autosave,
    TextTransformation,
    PastePlainText,
    PasteFromOffice,
    // Basic text styles
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Code,
    Subscript,
    Superscript,
    RemoveFormat,
    // Block structure
    Heading,
    Title,
    BlockQuote,
    CodeBlock,
    HorizontalLine,
    PageBreak,
    Alignment,
    Indent,
    IndentBlock,
    // Lists
    List,
    ListProperties,
    TodoList,
    // Links
    Link,
    AutoLink,
    // Images
    Image,
    ImageBlock,
    ImageInline,
    ImageCaption,
    ImageStyle,
    ImageToolbar,
    ImageResize,
    ImageTextAlternative,
    ImageUpload,
    ImageInsert,
    AutoImage,
    LinkImage,
    // Uploads and cloud integration
    FileRepository,
    SimpleUploadAdapter,
    Base64UploadAdapter,
    Notification,
    CloudServices,
    EasyImage,
    // Tables
    Table,
    TableToolbar,
    TableSelection,
    TableClipboard,
    TableProperties,
    TableCellProperties,
    TableCaption,
    TableColumnResize,
    // Embeds
    MediaEmbed,
    MediaEmbedToolbar,
    HtmlEmbed,
    // Fonts and colors
    FontFamily,
    FontSize,
    FontColor,
    FontBackgroundColor,
    Highlight,
    // Special characters
    SpecialCharacters,
    SpecialCharactersArrows,
    SpecialCharactersCurrency,
    SpecialCharactersEssentials,
    SpecialCharactersLatin,
    SpecialCharactersMathematical,
    SpecialCharactersText,
    // Tools
    FindAndReplace,
    Mention,
    WordCount,
    Markdown,
    SourceEditing,
    GeneralHtmlSupport,
    HtmlComment,
    Style,
    StandardEditingMode,
    RestrictedEditingMode,
    TextPartLanguage,
    ShowBlocks,
    Minimap,
    BlockToolbar,
    BalloonToolbar,
}

/// The two foundational plugins every configuration needs.
pub const CORE_PLUGINS: &[Plugin] = &[Plugin::Essentials, Plugin::Paragraph];

impl Plugin {
    /// Every plugin symbol, in declaration order.
    ///
    /// Reverse-dependency queries scan this slice, and tests use it to
    /// exercise the full universe at once.
    pub const ALL: &'static [Plugin] = &[
        Plugin::Essentials,
        Plugin::Paragraph,
        Plugin::Clipboard,
        Plugin::DragDrop,
        Plugin::Enter,
        Plugin::ShiftEnter,
        Plugin::Typing,
        Plugin::Undo,
        Plugin::SelectAll,
        Plugin::Autoformat,
        Plugin::Autosave,
        Plugin::TextTransformation,
        Plugin::PastePlainText,
        Plugin::PasteFromOffice,
        Plugin::Bold,
        Plugin::Italic,
        Plugin::Underline,
        Plugin::Strikethrough,
        Plugin::Code,
        Plugin::Subscript,
        Plugin::Superscript,
        Plugin::RemoveFormat,
        Plugin::Heading,
        Plugin::Title,
        Plugin::BlockQuote,
        Plugin::CodeBlock,
        Plugin::HorizontalLine,
        Plugin::PageBreak,
        Plugin::Alignment,
        Plugin::Indent,
        Plugin::IndentBlock,
        Plugin::List,
        Plugin::ListProperties,
        Plugin::TodoList,
        Plugin::Link,
        Plugin::AutoLink,
        Plugin::Image,
        Plugin::ImageBlock,
        Plugin::ImageInline,
        Plugin::ImageCaption,
        Plugin::ImageStyle,
        Plugin::ImageToolbar,
        Plugin::ImageResize,
        Plugin::ImageTextAlternative,
        Plugin::ImageUpload,
        Plugin::ImageInsert,
        Plugin::AutoImage,
        Plugin::LinkImage,
        Plugin::FileRepository,
        Plugin::SimpleUploadAdapter,
        Plugin::Base64UploadAdapter,
        Plugin::Notification,
        Plugin::CloudServices,
        Plugin::EasyImage,
        Plugin::Table,
        Plugin::TableToolbar,
        Plugin::TableSelection,
        Plugin::TableClipboard,
        Plugin::TableProperties,
        Plugin::TableCellProperties,
        Plugin::TableCaption,
        Plugin::TableColumnResize,
        Plugin::MediaEmbed,
        Plugin::MediaEmbedToolbar,
        Plugin::HtmlEmbed,
        Plugin::FontFamily,
        Plugin::FontSize,
        Plugin::FontColor,
        Plugin::FontBackgroundColor,
        Plugin::Highlight,
        Plugin::SpecialCharacters,
        Plugin::SpecialCharactersArrows,
        Plugin::SpecialCharactersCurrency,
        Plugin::SpecialCharactersEssentials,
        Plugin::SpecialCharactersLatin,
        Plugin::SpecialCharactersMathematical,
        Plugin::SpecialCharactersText,
        Plugin::FindAndReplace,
        Plugin::Mention,
        Plugin::WordCount,
        Plugin::Markdown,
        Plugin::SourceEditing,
        Plugin::GeneralHtmlSupport,
        Plugin::HtmlComment,
        Plugin::Style,
        Plugin::StandardEditingMode,
        Plugin::RestrictedEditingMode,
        Plugin::TextPartLanguage,
        Plugin::ShowBlocks,
        Plugin::Minimap,
        Plugin::BlockToolbar,
        Plugin::BalloonToolbar,
    ];

    /// The editor-facing name of this plugin, as it appears in emitted
    /// configuration.
    pub fn name(self) -> &'static str {
        match self {
            Plugin::Essentials => "Essentials",
            Plugin::Paragraph => "Paragraph",
            Plugin::Clipboard => "Clipboard",
            Plugin::DragDrop => "DragDrop",
            Plugin::Enter => "Enter",
            Plugin::ShiftEnter => "ShiftEnter",
            Plugin::Typing => "Typing",
            Plugin::Undo => "Undo",
            Plugin::SelectAll => "SelectAll",
            Plugin::Autoformat => "Autoformat",
            Plugin::Autosave => "Autosave",
            Plugin::TextTransformation => "TextTransformation",
            Plugin::PastePlainText => "PastePlainText",
            Plugin::PasteFromOffice => "PasteFromOffice",
            Plugin::Bold => "Bold",
            Plugin::Italic => "Italic",
            Plugin::Underline => "Underline",
            Plugin::Strikethrough => "Strikethrough",
            Plugin::Code => "Code",
            Plugin::Subscript => "Subscript",
            Plugin::Superscript => "Superscript",
            Plugin::RemoveFormat => "RemoveFormat",
            Plugin::Heading => "Heading",
            Plugin::Title => "Title",
            Plugin::BlockQuote => "BlockQuote",
            Plugin::CodeBlock => "CodeBlock",
            Plugin::HorizontalLine => "HorizontalLine",
            Plugin::PageBreak => "PageBreak",
            Plugin::Alignment => "Alignment",
            Plugin::Indent => "Indent",
            Plugin::IndentBlock => "IndentBlock",
            Plugin::List => "List",
            Plugin::ListProperties => "ListProperties",
            Plugin::TodoList => "TodoList",
            Plugin::Link => "Link",
            Plugin::AutoLink => "AutoLink",
            Plugin::Image => "Image",
            Plugin::ImageBlock => "ImageBlock",
            Plugin::ImageInline => "ImageInline",
            Plugin::ImageCaption => "ImageCaption",
            Plugin::ImageStyle => "ImageStyle",
            Plugin::ImageToolbar => "ImageToolbar",
            Plugin::ImageResize => "ImageResize",
            Plugin::ImageTextAlternative => "ImageTextAlternative",
            Plugin::ImageUpload => "ImageUpload",
            Plugin::ImageInsert => "ImageInsert",
            Plugin::AutoImage => "AutoImage",
            Plugin::LinkImage => "LinkImage",
            Plugin::FileRepository => "FileRepository",
            Plugin::SimpleUploadAdapter => "SimpleUploadAdapter",
            Plugin::Base64UploadAdapter => "Base64UploadAdapter",
            Plugin::Notification => "Notification",
            Plugin::CloudServices => "CloudServices",
            Plugin::EasyImage => "EasyImage",
            Plugin::Table => "Table",
            Plugin::TableToolbar => "TableToolbar",
            Plugin::TableSelection => "TableSelection",
            Plugin::TableClipboard => "TableClipboard",
            Plugin::TableProperties => "TableProperties",
            Plugin::TableCellProperties => "TableCellProperties",
            Plugin::TableCaption => "TableCaption",
            Plugin::TableColumnResize => "TableColumnResize",
            Plugin::MediaEmbed => "MediaEmbed",
            Plugin::MediaEmbedToolbar => "MediaEmbedToolbar",
            Plugin::HtmlEmbed => "HtmlEmbed",
            Plugin::FontFamily => "FontFamily",
            Plugin::FontSize => "FontSize",
            Plugin::FontColor => "FontColor",
            Plugin::FontBackgroundColor => "FontBackgroundColor",
            Plugin::Highlight => "Highlight",
            Plugin::SpecialCharacters => "SpecialCharacters",
            Plugin::SpecialCharactersArrows => "SpecialCharactersArrows",
            Plugin::SpecialCharactersCurrency => "SpecialCharactersCurrency",
            Plugin::SpecialCharactersEssentials => "SpecialCharactersEssentials",
            Plugin::SpecialCharactersLatin => "SpecialCharactersLatin",
            Plugin::SpecialCharactersMathematical => "SpecialCharactersMathematical",
            Plugin::SpecialCharactersText => "SpecialCharactersText",
            Plugin::FindAndReplace => "FindAndReplace",
            Plugin::Mention => "Mention",
            Plugin::WordCount => "WordCount",
            Plugin::Markdown => "Markdown",
            Plugin::SourceEditing => "SourceEditing",
            Plugin::GeneralHtmlSupport => "GeneralHtmlSupport",
            Plugin::HtmlComment => "HtmlComment",
            Plugin::Style => "Style",
            Plugin::StandardEditingMode => "StandardEditingMode",
            Plugin::RestrictedEditingMode => "RestrictedEditingMode",
            Plugin::TextPartLanguage => "TextPartLanguage",
            Plugin::ShowBlocks => "ShowBlocks",
            Plugin::Minimap => "Minimap",
            Plugin::BlockToolbar => "BlockToolbar",
            Plugin::BalloonToolbar => "BalloonToolbar",
        }
    }
}

impl fmt::Display for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A name that does not match any plugin symbol.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown plugin '{name}', expected an editor plugin name such as 'Bold' or 'ImageCaption'")]
pub struct UnknownPluginError {
    /// The name that failed to parse.
    pub name: String,
}

impl FromStr for Plugin {
    type Err = UnknownPluginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Plugin::ALL
            .iter()
            .copied()
            .find(|plugin| plugin.name() == s)
            .ok_or_else(|| UnknownPluginError {
                name: s.to_string(),
            })
    }
}

/// Descriptor for a third-party or licensed plugin.
///
/// The name is free-form and never validated against the closed enum;
/// unknown names simply have no registered dependencies. The per-instance
/// `dependencies` list is informational for the surrounding system only —
/// the resolver consults the central premium registry instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomPlugin {
    /// External plugin name (e.g. "ExportPdf").
    pub name: String,

    /// Whether this is a licensed/premium capability.
    #[serde(default)]
    pub premium: bool,

    /// Dependencies attached by the caller to this instance.
    #[serde(default)]
    pub dependencies: Vec<Plugin>,
}

impl CustomPlugin {
    /// Create a non-premium descriptor with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            premium: false,
            dependencies: Vec::new(),
        }
    }

    /// Create a premium descriptor with the given name.
    pub fn premium(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            premium: true,
            dependencies: Vec::new(),
        }
    }
}
