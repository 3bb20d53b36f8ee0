//! Handle `cnv research`.

use std::sync::Arc;

use async_trait::async_trait;

use canvass_core::entities::ResearchEntry;
use canvass_core::enums::SegmentField;
use canvass_core::responses::{ResearchDeleteResponse, ResearchSaveResponse};
use canvass_store::LibsqlStore;
use canvass_workspace::card::ResearchCard;
use canvass_workspace::confirm::{AlwaysConfirm, ConfirmPrompt};
use canvass_workspace::{ResearchForm, Workspace};

use crate::cli::ResearchCommands;
use crate::output::{self, OutputFormat};

/// Blocking y/N prompt on stdin for destructive actions.
struct StdinConfirm;

#[async_trait]
impl ConfirmPrompt for StdinConfirm {
    async fn confirm(&self, message: &str) -> bool {
        eprint!("{message} [y/N] ");
        let mut answer = String::new();
        if std::io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim(), "y" | "Y" | "yes")
    }
}

pub async fn handle(
    action: ResearchCommands,
    store: Arc<LibsqlStore>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match action {
        ResearchCommands::List { project } => {
            let entries = store.list_research(&project).await?;
            match format {
                OutputFormat::Json => output::json(&entries)?,
                OutputFormat::Text => {
                    if entries.is_empty() {
                        println!("No research entries yet for {project}.");
                    }
                    for entry in &entries {
                        print_card(&ResearchCard::summarize(entry));
                    }
                }
            }
        }

        ResearchCommands::Show { id } => {
            let entry = store.get_research(&id).await?;
            match format {
                OutputFormat::Json => output::json(&entry)?,
                OutputFormat::Text => print_entry(&entry),
            }
        }

        ResearchCommands::Create {
            project,
            title,
            market_size,
            market_trends,
            competitors,
            positioning,
            segments,
        } => {
            let project = store.get_project(&project).await?;
            let mut form = ResearchForm::create(&project);
            form.title = title;
            apply_text_flags(&mut form, market_size, market_trends, competitors, positioning);
            append_segments(&mut form, segments);
            form.validate()?;

            let research = store.insert_research(&form.draft()).await?;
            save_output(research, format)?;
        }

        ResearchCommands::Edit {
            id,
            title,
            market_size,
            market_trends,
            competitors,
            positioning,
            segments,
        } => {
            let existing = store.get_research(&id).await?;
            let project = store.get_project(&existing.project_id).await?;
            let mut form = ResearchForm::edit(&project, &existing);
            if let Some(title) = title {
                form.title = title;
            }
            apply_text_flags(&mut form, market_size, market_trends, competitors, positioning);
            append_segments(&mut form, segments);
            form.validate()?;

            store.update_research(&id, &form.draft()).await?;
            let research = store.get_research(&id).await?;
            save_output(research, format)?;
        }

        ResearchCommands::Delete { id, yes } => {
            // Resolve the entry's project so the delete runs through the
            // workspace with its confirmation step.
            let entry = store.get_research(&id).await?;
            let project = store.get_project(&entry.project_id).await?;

            let confirm: Arc<dyn ConfirmPrompt> = if yes {
                Arc::new(AlwaysConfirm)
            } else {
                Arc::new(StdinConfirm)
            };
            let mut workspace = Workspace::new(store, confirm);
            workspace.select_project(Some(project)).await;
            workspace.delete(&id).await;

            let deleted = workspace.entries().iter().all(|e| e.id != id);
            match format {
                OutputFormat::Json => {
                    output::json(&ResearchDeleteResponse { deleted, id })?;
                }
                OutputFormat::Text => {
                    if deleted {
                        println!("Deleted {id}.");
                    } else {
                        println!("{id} was not deleted.");
                    }
                }
            }
        }
    }
    Ok(())
}

fn apply_text_flags(
    form: &mut ResearchForm,
    market_size: Option<String>,
    market_trends: Option<String>,
    competitors: Option<String>,
    positioning: Option<String>,
) {
    if let Some(value) = market_size {
        form.market_size_analysis = value;
    }
    if let Some(value) = market_trends {
        form.market_trends_tracking = value;
    }
    if let Some(value) = competitors {
        form.competitor_identification = value;
    }
    if let Some(value) = positioning {
        form.positioning_strategy = value;
    }
}

fn append_segments(form: &mut ResearchForm, names: Vec<String>) {
    for name in names {
        form.add_segment();
        let index = form.segments().len() - 1;
        form.set_segment(index, SegmentField::Name, name);
    }
}

fn save_output(research: ResearchEntry, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => output::json(&ResearchSaveResponse { research })?,
        OutputFormat::Text => {
            println!("Saved {} ({})", research.title, research.id);
        }
    }
    Ok(())
}

fn print_card(card: &ResearchCard) {
    let mut badges = Vec::new();
    if card.has_market_trends {
        badges.push("trends");
    }
    if card.has_competitor_analysis {
        badges.push("competitors");
    }
    if card.has_segments {
        badges.push("segments");
    }
    let badges = if badges.is_empty() {
        String::new()
    } else {
        format!("  [{}]", badges.join(", "))
    };
    println!(
        "{}  {}  ({})  {}{badges}",
        card.id, card.title, card.created, card.segment_label
    );
    if let Some(preview) = &card.market_size_preview {
        println!("    market size: {preview}");
    }
    if let Some(preview) = &card.positioning_preview {
        println!("    positioning: {preview}");
    }
}

fn print_entry(entry: &ResearchEntry) {
    println!("{}  {}", entry.id, entry.title);
    println!("project: {}", entry.project_id);
    for (label, field) in [
        ("market size", &entry.market_size_analysis),
        ("market trends", &entry.market_trends_tracking),
        ("competitors", &entry.competitor_identification),
        ("positioning", &entry.positioning_strategy),
    ] {
        if let Some(text) = field {
            println!("{label}: {text}");
        }
    }
    for (i, segment) in entry.target_segments.iter().enumerate() {
        println!("Segment {}: {}", i + 1, segment.name);
        if !segment.description.is_empty() {
            println!("    {}", segment.description);
        }
        if !segment.size.is_empty() {
            println!("    size: {}", segment.size);
        }
        if !segment.characteristics.is_empty() {
            println!("    characteristics: {}", segment.characteristics);
        }
    }
}
