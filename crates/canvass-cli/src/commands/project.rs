//! Handle `cnv project`.

use canvass_core::responses::{ProjectCreateResponse, ProjectListResponse};
use canvass_store::LibsqlStore;

use crate::cli::ProjectCommands;
use crate::output::{self, OutputFormat};

pub async fn handle(
    action: ProjectCommands,
    store: &LibsqlStore,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match action {
        ProjectCommands::Create { name, description } => {
            let project = store.create_project(&name, description.as_deref()).await?;
            match format {
                OutputFormat::Json => output::json(&ProjectCreateResponse { project })?,
                OutputFormat::Text => {
                    println!("Created project {} ({})", project.name, project.id);
                }
            }
        }
        ProjectCommands::List => {
            let projects = store.list_projects().await?;
            match format {
                OutputFormat::Json => output::json(&ProjectListResponse { projects })?,
                OutputFormat::Text => {
                    if projects.is_empty() {
                        println!("No projects yet. Create one with `cnv project create`.");
                    }
                    for project in projects {
                        let description = project.description.as_deref().unwrap_or("-");
                        println!("{}  {}  {}", project.id, project.name, description);
                    }
                }
            }
        }
    }
    Ok(())
}
