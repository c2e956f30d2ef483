//! RSX language server implementation.
//!
//! An `.rsx` file interleaves a Rust logic block, an HTML template, a style
//! block and a TypeScript script block in one source file. The server's core
//! is the virtualization engine in [`document`]: it partitions the composite
//! text into typed sections, carves out a virtual buffer per section with its
//! own zero-based coordinate space, and records the offset mapping and
//! capability mask that let per-language tooling results be re-projected into
//! host document coordinates.

use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer, LspService};

pub mod directives;
pub mod document;
pub mod logger;
mod lsp;
pub mod settings;
pub mod syntax;

pub use document::{
    Capabilities, DocumentStore, LineIndex, Mapping, RsxDocumentState, VirtualBuffer,
    VirtualRegion,
};
pub use lsp::{completion_at_position, document_symbols, hover_at_position, to_diagnostics};

pub struct Backend {
    client: Client,
    documents: DocumentStore,
}

impl Backend {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
            documents: DocumentStore::new(),
        }
    }

    /// Rebuild the document's decomposition and publish diagnostics.
    async fn on_document_change(&self, uri: Url, text: String, version: i32) {
        let state = self.documents.open(uri.clone(), text, version);
        log::debug!(
            "rebuilt {uri}: {} regions, {} syntax errors",
            state.regions.len(),
            state.errors.len()
        );
        self.client
            .publish_diagnostics(uri, lsp::to_diagnostics(&state), Some(state.version))
            .await;
    }
}

fn is_rsx_file(uri: &Url) -> bool {
    uri.path().ends_with(".rsx")
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        #[allow(deprecated)]
        let root_uri = params.root_uri.clone();
        let workspace_root = params
            .workspace_folders
            .as_ref()
            .and_then(|folders| folders.first())
            .and_then(|f| f.uri.to_file_path().ok())
            .or_else(|| root_uri?.to_file_path().ok());

        if let Some(root) = workspace_root {
            let (settings, settings_dir) = settings::discover_settings(&root);
            if let Some(level) = settings.log_level() {
                logger::set_level(level);
                log::info!("log level {level} from {}", settings_dir.display());
            }
        }

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                completion_provider: Some(CompletionOptions {
                    trigger_characters: Some(
                        ["{", "@", "#", ":", "<", "-"]
                            .iter()
                            .map(|s| s.to_string())
                            .collect(),
                    ),
                    resolve_provider: Some(false),
                    ..Default::default()
                }),
                document_symbol_provider: Some(OneOf::Left(true)),
                ..Default::default()
            },
            ..Default::default()
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "RSX language server initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        log::info!("server shutting down");
        log::logger().flush();
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        self.on_document_change(
            params.text_document.uri,
            params.text_document.text,
            params.text_document.version,
        )
        .await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        // FULL sync: exactly one change carrying the whole new text
        if let Some(change) = params.content_changes.into_iter().next() {
            self.on_document_change(
                params.text_document.uri,
                change.text,
                params.text_document.version,
            )
            .await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        self.documents.close(&params.text_document.uri);
        self.client
            .publish_diagnostics(params.text_document.uri, vec![], None)
            .await;
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = &params.text_document_position.text_document.uri;
        if !is_rsx_file(uri) {
            return Ok(None);
        }

        let Some(doc) = self.documents.get(uri) else {
            return Ok(None);
        };

        Ok(lsp::completion_at_position(
            &doc,
            params.text_document_position.position,
        ))
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = &params.text_document_position_params.text_document.uri;
        if !is_rsx_file(uri) {
            return Ok(None);
        }

        let Some(doc) = self.documents.get(uri) else {
            return Ok(None);
        };

        Ok(lsp::hover_at_position(
            &doc,
            params.text_document_position_params.position,
        ))
    }

    async fn document_symbol(
        &self,
        params: DocumentSymbolParams,
    ) -> Result<Option<DocumentSymbolResponse>> {
        let uri = &params.text_document.uri;
        if !is_rsx_file(uri) {
            return Ok(None);
        }

        let Some(doc) = self.documents.get(uri) else {
            return Ok(None);
        };

        let symbols = lsp::document_symbols(&doc);
        if symbols.is_empty() {
            Ok(None)
        } else {
            Ok(Some(DocumentSymbolResponse::Nested(symbols)))
        }
    }
}

pub fn create_service() -> (LspService<Backend>, tower_lsp::ClientSocket) {
    LspService::new(Backend::new)
}
