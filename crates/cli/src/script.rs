//! Command scripts: JSON lists of commands and queries replayed against a
//! headless canvas.

use anyhow::{Context, Result};
use api::{execute_command, execute_query, Command, CommandResult, Query, QueryResult};
use canvas::{Canvas, CanvasEvent};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One entry of a script. Commands and queries share the `type` tag and never
/// collide, so the first variant that parses wins.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Command(Command),
    Query(Query),
}

/// What a step produced: its result plus the canvas events it caused.
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Command {
        result: CommandResult,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        events: Vec<CanvasEvent>,
    },
    Query {
        result: QueryResult,
    },
}

impl Outcome {
    pub fn is_error(&self) -> bool {
        match self {
            Outcome::Command { result, .. } => result.is_error(),
            Outcome::Query { result } => matches!(result, QueryResult::Error { .. }),
        }
    }
}

/// Parse a script. Accepts a JSON array of steps or one step per line.
pub fn parse(source: &str) -> Result<Vec<Step>> {
    let trimmed = source.trim_start();
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).context("Invalid script JSON");
    }
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with("//")
        })
        .map(|(i, line)| {
            serde_json::from_str(line).with_context(|| format!("Invalid step on line {}", i + 1))
        })
        .collect()
}

pub fn load(path: &Path) -> Result<Vec<Step>> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script: {}", path.display()))?;
    parse(&source).with_context(|| format!("Failed to parse script: {}", path.display()))
}

/// Run one step and collect the events it emitted.
pub fn run_step(canvas: &mut Canvas, step: Step) -> Outcome {
    match step {
        Step::Command(command) => {
            let result = execute_command(canvas, command);
            Outcome::Command {
                result,
                events: canvas.drain_events(),
            }
        }
        Step::Query(query) => Outcome::Query {
            result: execute_query(canvas, query),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_array_and_line_scripts() {
        let array = r#"[
            { "type": "create_shape", "position": [0, 0], "size": [100, 50] },
            { "type": "get_shape_count" }
        ]"#;
        let steps = parse(array).unwrap();
        assert!(matches!(steps[0], Step::Command(Command::CreateShape { .. })));
        assert!(matches!(steps[1], Step::Query(Query::GetShapeCount)));

        let lines = "// setup\n{ \"type\": \"attach_timeline\", \"playhead\": 3 }\n\n{ \"type\": \"get_timeline\" }\n";
        let steps = parse(lines).unwrap();
        assert_eq!(steps.len(), 2);
        assert!(matches!(
            steps[0],
            Step::Command(Command::AttachTimeline { playhead: 3 })
        ));
    }

    #[test]
    fn test_reports_bad_line_number() {
        let err = parse("{ \"type\": \"clear_selection\" }\n{ \"type\": \"warp\" }").unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
    }

    #[test]
    fn test_command_steps_collect_events() {
        let mut canvas = Canvas::default();
        let steps = parse(r#"[{ "type": "create_shape", "position": [0, 0], "size": [60, 60] }]"#)
            .unwrap();
        let outcome = run_step(&mut canvas, steps[0].clone());
        match outcome {
            Outcome::Command { result, events } => {
                assert!(!result.is_error());
                assert!(matches!(events[0], CanvasEvent::ShapeAdded { .. }));
            }
            Outcome::Query { .. } => panic!("expected a command outcome"),
        }
        assert!(canvas.drain_events().is_empty());
    }

    #[test]
    fn test_failing_step_is_an_error_outcome() {
        let mut canvas = Canvas::default();
        let outcome = run_step(&mut canvas, Step::Command(Command::SetPlayhead { time: 2 }));
        assert!(outcome.is_error());
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["result"]["status"], "error");
        assert!(json.get("events").is_none());
    }
}
