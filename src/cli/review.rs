//! Interactive terminal review flow.
//!
//! Drives the review machine in-process: pick a meeting, answer each
//! task, then print the generated summary. The summary credential stays
//! inside this process.

use anyhow::{bail, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, FuzzySelect, Input};
use std::sync::Arc;
use std::time::Duration;

use crate::app::build_summarizer;
use crate::catalog::{MeetingCatalog, StaticCatalog};
use crate::cli::args::ReviewCliArgs;
use crate::config::Config;
use crate::session::{ReviewMachine, SessionPhase};

pub async fn handle_review_command(args: ReviewCliArgs) -> Result<()> {
    let config = Config::load()?;
    let catalog: Arc<dyn MeetingCatalog> = Arc::new(StaticCatalog::demo());
    let summarizer = Arc::new(build_summarizer(&config)?);
    let machine = ReviewMachine::new(catalog.clone(), summarizer);

    let meeting_id = match args.meeting_id {
        Some(id) => id,
        None => pick_meeting(catalog.as_ref())?,
    };

    let meeting = machine.start(&meeting_id).await?;

    println!("\n{} ({} at {})", meeting.title, meeting.date, meeting.time);
    println!("Agenda:    {}", meeting.agenda);
    println!("Updates:   {}", meeting.updates);
    println!("Decisions: {}", meeting.decisions);
    println!("Blockers:  {}\n", meeting.blockers);

    let theme = ColorfulTheme::default();
    loop {
        let state = machine.state().await;
        if state.phase != SessionPhase::InProgress {
            break;
        }

        let task = match state.current_task() {
            Some(task) => task.clone(),
            None => break,
        };

        println!(
            "Task {} of {}: {}",
            state.task_index + 1,
            meeting.tasks.len(),
            task.title
        );
        println!("  Assigned to {} / Due {}", task.assignee, task.deadline);

        let completed = Confirm::with_theme(&theme)
            .with_prompt("Was this task completed?")
            .interact()?;
        machine.set_draft_answer(completed).await?;

        let prompt = if completed {
            "Did you face any challenges?"
        } else {
            "Why was it not completed?"
        };
        let reason: String = Input::with_theme(&theme)
            .with_prompt(prompt)
            .validate_with(|input: &String| {
                if input.trim().is_empty() {
                    Err("Please provide details")
                } else {
                    Ok(())
                }
            })
            .interact_text()?;
        machine.set_draft_reason(reason).await?;

        machine.submit_current_task().await?;
        println!();
    }

    println!("Generating summary...");
    loop {
        tokio::time::sleep(Duration::from_millis(250)).await;
        let state = machine.state().await;
        match state.phase {
            SessionPhase::Summarized => {
                println!("\n{}\n", state.summary.unwrap_or_default());
                return Ok(());
            }
            SessionPhase::Failed => {
                bail!(
                    "Failed to generate summary: {}. Your answers are kept for this session; run the review again or retry via the API service.",
                    state.last_error.unwrap_or_else(|| "unknown error".to_string())
                );
            }
            _ => {}
        }
    }
}

fn pick_meeting(catalog: &dyn MeetingCatalog) -> Result<String> {
    let meetings = catalog.list_meetings();
    let labels: Vec<String> = meetings
        .iter()
        .map(|m| format!("{} ({} at {})", m.title, m.date, m.time))
        .collect();

    let index = FuzzySelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Select a meeting to review")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(meetings[index].id.clone())
}
