//! Outreach message drafting: one prompt strategy per outreach stage.
//!
//! Each touchpoint after the initial message has its own angle — the
//! message a prospect gets on the third nudge should not read like the
//! first one. The prompt is assembled from whatever job context exists;
//! absent fields are simply omitted.

use crate::ai::{CompletionClient, DraftError};
use crate::stage::Stage;
use crate::types::Job;

/// The strategy line injected into the prompt for each outreach stage.
fn strategy_for(stage: Stage) -> Option<&'static str> {
    match stage {
        Stage::InitialMessageSent => Some(
            "This is the first message after applying. Lead with the prototype: \
             one concrete observation about their problem, what was built, and \
             a link. No pleasantries longer than one sentence.",
        ),
        Stage::Touchpoint1 => Some(
            "First follow-up. Add one piece of value that was not in the initial \
             message — a specific improvement idea or a question about their \
             workflow. Reference the prototype briefly, do not re-pitch it.",
        ),
        Stage::Touchpoint2 => Some(
            "Second follow-up. Use soft social proof: similar problems solved, \
             without naming confidential clients. Keep it to three sentences and \
             end with a low-friction yes/no question.",
        ),
        Stage::Touchpoint3 => Some(
            "Final follow-up. Polite close-out: acknowledge they may have gone \
             another way, leave the prototype link standing, and make clear no \
             reply is needed unless they want to pick it up later.",
        ),
        _ => None,
    }
}

/// Build the drafting prompt for a job at an outreach stage.
///
/// Fails with `UnsupportedStage` for stages outside the outreach chain —
/// there is nothing to draft for a job that is still being built or
/// already closed.
pub fn prompt_for(stage: Stage, job: &Job) -> Result<String, DraftError> {
    let strategy =
        strategy_for(stage).ok_or_else(|| DraftError::UnsupportedStage(stage.as_str().into()))?;

    let mut context = Vec::new();
    if let Some(ref title) = job.title {
        context.push(format!("Job title: {}", title));
    }
    if let Some(ref client) = job.client {
        context.push(format!("Client: {}", client));
    }
    if let Some(ref skills) = job.skills {
        context.push(format!("Skills requested: {}", skills));
    }
    if let Some(ref description) = job.description {
        context.push(format!("Job description:\n{}", description));
    }
    if let Some(ref brief) = job.brief {
        context.push(format!("Prototype brief:\n{}", brief));
    }
    if let Some(ref url) = job.prototype_url {
        context.push(format!("Prototype link: {}", url));
    }
    if let Some(ref url) = job.loom_url {
        context.push(format!("Walkthrough video: {}", url));
    }

    let mut prompt = String::new();
    prompt.push_str(
        "You draft short, direct outreach messages for a freelance prototyping \
         studio. Write the message body only — no subject line, no signature, \
         no placeholder brackets.\n\n",
    );
    prompt.push_str("Strategy for this message:\n");
    prompt.push_str(strategy);
    prompt.push_str("\n\nJob context:\n");
    if context.is_empty() {
        prompt.push_str("(no job details on record)\n");
    } else {
        for line in &context {
            prompt.push_str(line);
            prompt.push('\n');
        }
    }

    Ok(prompt)
}

/// Draft the outreach message for a job at `stage`. One completion call,
/// no retry.
pub async fn draft_message(
    client: &CompletionClient,
    stage: Stage,
    job: &Job,
) -> Result<String, DraftError> {
    let prompt = prompt_for(stage, job)?;
    let text = client.complete(&prompt).await?;
    log::info!(
        "drafted {} message for job {} ({} chars)",
        stage.label(),
        job.id,
        text.len()
    );
    Ok(text)
}
