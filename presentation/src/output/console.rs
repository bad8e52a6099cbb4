//! Console output formatter for workflow runs

use colored::Colorize;
use pecko_application::{RunWorkflowError, RunWorkflowOutput};
use pecko_domain::{AiMessage, Message, ToolCall, ToolResultMessage};
use std::path::Path;

/// Longest tool output shown inline
const PREVIEW_CHARS: usize = 400;
const PREVIEW_LINES: usize = 8;

/// Formats conversation messages and run summaries for the terminal
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format one conversation message
    pub fn format_message(message: &Message) -> String {
        match message {
            Message::System { content } => format!("{}\n", content.dimmed()),
            Message::Human { content } => {
                format!("{} {}\n", ">".cyan().bold(), content)
            }
            Message::Ai(ai) => Self::format_ai(ai),
            Message::ToolResult(result) => Self::format_tool_result(result),
        }
    }

    /// Format several messages in order
    pub fn format_messages(messages: &[Message]) -> String {
        messages.iter().map(Self::format_message).collect()
    }

    fn format_ai(ai: &AiMessage) -> String {
        let author = ai.author.map(|r| r.as_str()).unwrap_or("assistant");
        let mut output = format!("\n{}\n", format!("── {} ──", author).yellow().bold());

        if !ai.content.trim().is_empty() {
            output.push_str(ai.content.trim_end());
            output.push('\n');
        }
        for call in &ai.tool_calls {
            output.push_str(&format!("  {} {}\n", "->".blue(), Self::format_call(call)));
        }
        output
    }

    fn format_call(call: &ToolCall) -> String {
        let args = call
            .arguments
            .iter()
            .map(|(key, value)| {
                let rendered = match value.as_str() {
                    Some(s) => format!("{:?}", preview(s, 60, 1)),
                    None => value.to_string(),
                };
                format!("{}={}", key, rendered)
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({})", call.name.bold(), args)
    }

    fn format_tool_result(result: &ToolResultMessage) -> String {
        let body = preview(&result.content, PREVIEW_CHARS, PREVIEW_LINES);
        let marker = if result.is_error {
            "<-".red()
        } else {
            "<-".green()
        };
        let mut output = format!("  {} {}\n", marker, result.tool_name.bold());
        for line in body.lines() {
            let line = if result.is_error {
                line.red().to_string()
            } else {
                line.dimmed().to_string()
            };
            output.push_str(&format!("     {}\n", line));
        }
        output
    }

    /// Format the summary of a finished run
    pub fn format_summary(output: &RunWorkflowOutput) -> String {
        let mut text = format!(
            "\n{} {} steps, {} messages\n",
            "Done:".green().bold(),
            output.steps,
            output.log.len()
        );
        if let Some(response) = output.final_response.as_deref()
            && !response.trim().is_empty()
        {
            text.push_str(&format!("\n{}\n{}\n", "Final response:".cyan().bold(), response.trim_end()));
        }
        text
    }

    /// Format the outcome of `pecko init`
    pub fn format_init(created: bool, message: &str) -> String {
        if created {
            format!("{}\n", message.green())
        } else {
            format!("{}\n", message.yellow())
        }
    }

    /// Format `pecko status`; `None` when no workspace was found
    pub fn format_status(workspace: Option<(&Path, &Path)>) -> String {
        match workspace {
            Some((root, meta)) => format!(
                "{}\nroot: {}\nmeta: {}\n",
                "Initialized".bold(),
                root.display(),
                meta.display()
            ),
            None => format!("{} Run: pecko init\n", "Not initialized.".red()),
        }
    }

    /// Format a failed run, including how much of the transcript survived
    pub fn format_failure(error: &RunWorkflowError) -> String {
        let mut text = format!("\n{} {}\n", "Run failed:".red().bold(), error);
        if let Some(partial) = error.partial() {
            text.push_str(&format!(
                "{}\n",
                format!("(partial conversation: {} messages)", partial.len()).dimmed()
            ));
        }
        text
    }
}

/// Trim `text` to at most `max_lines` lines and `max_chars` characters
fn preview(text: &str, max_chars: usize, max_lines: usize) -> String {
    let total_lines = text.lines().count();
    let mut out: String = text
        .lines()
        .take(max_lines)
        .collect::<Vec<_>>()
        .join("\n");
    let mut truncated = total_lines > max_lines;

    if out.chars().count() > max_chars {
        out = out.chars().take(max_chars).collect();
        truncated = true;
    }
    if truncated {
        out.push_str(" ...");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pecko_domain::{ConversationLog, RoleKind};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_format_ai_with_tool_call() {
        plain();
        let ai = AiMessage::new("Writing the file.")
            .with_author(RoleKind::Worker)
            .with_tool_call(
                ToolCall::new("c1", "write_file")
                    .with_arg("file_path", "notes.txt")
                    .with_arg("content", "hello"),
            );

        let text = ConsoleFormatter::format_message(&Message::Ai(ai));

        assert!(text.contains("── worker ──"));
        assert!(text.contains("Writing the file."));
        assert!(text.contains("write_file(content=\"hello\", file_path=\"notes.txt\")"));
    }

    #[test]
    fn test_format_error_result() {
        plain();
        let mut message = ToolResultMessage {
            call_id: "c1".to_string(),
            tool_name: "read_file".to_string(),
            content: "Error: nope.txt is not a file or does not exist.".to_string(),
            is_error: true,
        };
        let text = ConsoleFormatter::format_message(&Message::ToolResult(message.clone()));
        assert!(text.contains("<- read_file"));
        assert!(text.contains("Error: nope.txt"));

        message.content = (0..20).map(|i| format!("line {}\n", i)).collect();
        message.is_error = false;
        let text = ConsoleFormatter::format_message(&Message::ToolResult(message));
        assert!(text.contains("line 7"));
        assert!(!text.contains("line 8"));
        assert!(text.contains("..."));
    }

    #[test]
    fn test_format_summary() {
        plain();
        let log = ConversationLog::from(vec![Message::human("hi"), Message::ai("All done.")]);
        let output = RunWorkflowOutput {
            log,
            steps: 1,
            final_response: Some("All done.".to_string()),
        };

        let text = ConsoleFormatter::format_summary(&output);
        assert!(text.contains("Done: 1 steps, 2 messages"));
        assert!(text.contains("All done."));
    }

    #[test]
    fn test_format_failure_with_partial() {
        plain();
        let error = RunWorkflowError::StepLimitExceeded {
            limit: 4,
            partial: ConversationLog::from(vec![Message::human("hi")]),
        };

        let text = ConsoleFormatter::format_failure(&error);
        assert!(text.contains("Run failed: Step limit of 4 exceeded"));
        assert!(text.contains("partial conversation: 1 messages"));
    }

    #[test]
    fn test_format_status() {
        plain();
        let text = ConsoleFormatter::format_status(Some((
            Path::new("/work"),
            Path::new("/work/.pecko"),
        )));
        assert_eq!(text, "Initialized\nroot: /work\nmeta: /work/.pecko\n");
        assert_eq!(
            ConsoleFormatter::format_status(None),
            "Not initialized. Run: pecko init\n"
        );
    }

    #[test]
    fn test_preview_limits() {
        assert_eq!(preview("short", 10, 2), "short");
        assert_eq!(preview("abcdef", 3, 2), "abc ...");
        assert_eq!(preview("a\nb\nc", 100, 2), "a\nb ...");
    }
}
