//! Note export operation.
//!
//! Validates configuration, builds the GraphQL gateway, and streams records
//! to standard output or the configured output file.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use mr_notes::{
    AccessToken, BranchFilter, ExtractionError, ExtractionSummary, GraphQlClient, GraphQlGateway,
    JsonlEmitter, MergeRequestGateway, NoteExtraction, NotesConfig, ProjectPath,
};

/// Exports the notes of every matching merge request.
///
/// The token is checked before anything else so a missing credential fails
/// without any network traffic.
///
/// # Errors
///
/// Returns an error if:
/// - The token is missing
/// - The repository or branches are missing, or the page size is invalid
/// - A GitLab request fails
/// - Writing to the output fails
pub async fn run(config: &NotesConfig) -> Result<(), ExtractionError> {
    let token = AccessToken::new(config.resolve_token()?)?;
    let project = config.require_repository()?;
    let branches = config.require_branches()?;
    let page_size = config.page_size()?;

    let client = GraphQlClient::new(&token, config.api_url())?;
    let gateway = GraphQlGateway::new(client).with_page_size(page_size);

    let summary = write_output(config, &gateway, &project, &branches).await?;
    tracing::info!(
        merge_requests = summary.merge_requests,
        records = summary.records,
        "export finished"
    );
    Ok(())
}

/// Streams records to the configured output destination.
async fn write_output<G>(
    config: &NotesConfig,
    gateway: &G,
    project: &ProjectPath,
    branches: &BranchFilter,
) -> Result<ExtractionSummary, ExtractionError>
where
    G: MergeRequestGateway,
{
    if let Some(path) = &config.output {
        let file = File::create(path).map_err(|e| ExtractionError::Io {
            message: format!("failed to create output file '{path}': {e}"),
        })?;
        let mut writer = BufWriter::new(file);
        let summary = export(&mut writer, gateway, project, branches).await?;
        writer.flush().map_err(|e| ExtractionError::Io {
            message: format!("failed to flush output file: {e}"),
        })?;
        Ok(summary)
    } else {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        export(&mut writer, gateway, project, branches).await
    }
}

async fn export<W, G>(
    writer: &mut W,
    gateway: &G,
    project: &ProjectPath,
    branches: &BranchFilter,
) -> Result<ExtractionSummary, ExtractionError>
where
    W: Write,
    G: MergeRequestGateway,
{
    let mut emitter = JsonlEmitter::new(writer);
    NoteExtraction::new(gateway)
        .run(project, branches, &mut emitter)
        .await
}
