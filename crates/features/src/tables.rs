//! Static dependency tables for the plugin graph.
//!
//! Three read-only tables live here and nowhere else:
//! - hard dependencies between first-party plugins,
//! - recommended (soft) companions,
//! - hard dependencies of external/premium plugin names.
//!
//! All lookups are total: a plugin or name with no entry has no
//! dependencies. The hard-dependency graph is acyclic and free of
//! self-loops by authoring convention; the resolver and sorter stay
//! well-behaved even if an edit ever violates that.

use crate::symbol::Plugin;

/// Hard dependencies of a plugin: everything that must be present for it
/// to function.
///
/// The match is exhaustive on purpose. Adding a plugin variant fails to
/// compile until its dependencies are declared here.
pub fn direct_dependencies(plugin: Plugin) -> &'static [Plugin] {
    use Plugin::*;

    match plugin {
        Heading | Title => &[Paragraph],
        CodeBlock => &[ShiftEnter],
        Autoformat | TextTransformation | Mention | SpecialCharacters => &[Typing],
        DragDrop | PastePlainText | PasteFromOffice => &[Clipboard],
        IndentBlock => &[Indent],
        ListProperties | TodoList => &[List],
        AutoLink => &[Link],
        ImageBlock | ImageInline | ImageCaption | ImageStyle | ImageToolbar | ImageResize
        | ImageTextAlternative => &[Image],
        ImageUpload => &[Image, FileRepository],
        ImageInsert => &[ImageUpload],
        AutoImage => &[Image, Clipboard],
        LinkImage => &[Image, Link],
        SimpleUploadAdapter | Base64UploadAdapter => &[FileRepository],
        CloudServices => &[Notification],
        EasyImage => &[CloudServices, ImageUpload],
        TableToolbar | TableSelection | TableProperties | TableCellProperties | TableCaption
        | TableColumnResize => &[Table],
        TableClipboard => &[TableSelection, Clipboard],
        MediaEmbedToolbar => &[MediaEmbed],
        SpecialCharactersArrows | SpecialCharactersCurrency | SpecialCharactersEssentials
        | SpecialCharactersLatin | SpecialCharactersMathematical | SpecialCharactersText => {
            &[SpecialCharacters]
        }
        Style => &[GeneralHtmlSupport],
        Essentials | Paragraph | Clipboard | Enter | ShiftEnter | Typing | Undo | SelectAll
        | Autosave | Bold | Italic | Underline | Strikethrough | Code | Subscript
        | Superscript | RemoveFormat | BlockQuote | HorizontalLine | PageBreak | Alignment
        | Indent | List | Link | Image | FileRepository | Notification | Table | MediaEmbed
        | HtmlEmbed | FontFamily | FontSize | FontColor | FontBackgroundColor | Highlight
        | FindAndReplace | WordCount | Markdown | SourceEditing | GeneralHtmlSupport
        | HtmlComment | StandardEditingMode | RestrictedEditingMode | TextPartLanguage
        | ShowBlocks | Minimap | BlockToolbar | BalloonToolbar => &[],
    }
}

/// Recommended companions: plugins that improve this one but are not
/// required for it to function.
pub fn recommended(plugin: Plugin) -> &'static [Plugin] {
    use Plugin::*;

    match plugin {
        Clipboard => &[DragDrop, PastePlainText],
        Typing => &[TextTransformation],
        TextTransformation => &[Autoformat],
        Link => &[AutoLink],
        List => &[ListProperties],
        Image => &[ImageToolbar, ImageCaption, ImageStyle],
        ImageUpload => &[ImageResize],
        Table => &[TableToolbar, TableSelection],
        TableSelection => &[TableClipboard],
        MediaEmbed => &[MediaEmbedToolbar],
        SpecialCharacters => &[SpecialCharactersEssentials],
        GeneralHtmlSupport => &[HtmlComment],
        _ => &[],
    }
}

/// External plugin names that require the cloud-services integration.
///
/// Every name listed here must also carry [`Plugin::CloudServices`] in its
/// [`premium_dependencies`] entry; a unit test enforces that.
pub const REQUIRES_CLOUD_SERVICES: &[&str] = &[
    "AiAssistant",
    "ExportPdf",
    "ExportWord",
    "ImportWord",
    "RealTimeCollaboration",
];

/// Hard core-plugin dependencies of an external/premium plugin name.
///
/// Unknown names are legal and have no dependencies.
pub fn premium_dependencies(name: &str) -> &'static [Plugin] {
    use Plugin::*;

    match name {
        "AiAssistant" | "ExportPdf" | "ExportWord" | "ImportWord" | "RealTimeCollaboration" => {
            &[CloudServices]
        }
        "MultiLevelList" => &[List],
        "SlashCommand" => &[Typing],
        "DocumentOutline" | "TableOfContents" => &[Heading],
        // Premium but self-contained.
        "CaseChange" | "Comments" | "FormatPainter" | "MergeFields" | "Pagination"
        | "RevisionHistory" | "Template" | "TrackChanges" => &[],
        _ => &[],
    }
}

/// Whether an external plugin name requires the cloud-services integration.
pub fn requires_cloud_services(name: &str) -> bool {
    REQUIRES_CLOUD_SERVICES.contains(&name)
}
