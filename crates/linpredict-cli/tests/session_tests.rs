use linpredict_cli::session::Session;
use linpredict_core::{Dataset, Predictor};

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use tempfile::TempDir;

struct Run {
    predictor: Predictor,
    output: String,
}

fn data_path(dir: &TempDir) -> PathBuf {
    dir.path().join("model_data.json")
}

fn run_session(dir: &TempDir, input: &str) -> Run {
    run_session_bytes(dir, input.as_bytes())
}

fn run_session_bytes(dir: &TempDir, input: &[u8]) -> Run {
    let predictor = Predictor::load(data_path(dir)).unwrap();
    let mut session = Session::new(
        predictor,
        dir.path().join("predictions.png"),
        Cursor::new(input.to_vec()),
        Vec::new(),
    );
    session.run().unwrap();
    let (predictor, out) = session.into_parts();
    Run { predictor, output: String::from_utf8(out).unwrap() }
}

/// Pulls the number printed after `Predicted value for <input>: `.
fn printed_prediction(output: &str, input: &str) -> f64 {
    let marker = format!("Predicted value for {input}: ");
    let start = output.rfind(&marker).expect("no prediction printed") + marker.len();
    output[start..].split_whitespace().next().unwrap().parse().unwrap()
}

#[test]
fn fresh_start_predicts_on_the_default_line() {
    let dir = tempfile::tempdir().unwrap();
    let run = run_session(&dir, "1\n6\n8\n");

    assert!(run.output.contains("Predicted value for 6: 12.00"));
    assert!(run.output.contains("Have a nice day!"));
    assert_eq!(run.predictor.predictions().len(), 1);
    assert_eq!(Dataset::read(&data_path(&dir)).unwrap(), Dataset::default());
}

#[test]
fn adding_a_point_pulls_the_prediction() {
    let dir = tempfile::tempdir().unwrap();
    let run = run_session(&dir, "2\n6\n11\n1\n6\n8\n");

    assert!(run.output.contains("New data added and model updated!"));
    let p = printed_prediction(&run.output, "6");
    assert!(p > 10. && p < 12., "prediction {p}");
    assert_eq!(Dataset::read(&data_path(&dir)).unwrap().len(), 6);
}

#[test]
fn invalid_number_leaves_state_alone() {
    let dir = tempfile::tempdir().unwrap();
    let run = run_session(&dir, "1\nabc\n2\n1\nnope\n8\n");

    assert!(run.output.contains("Please enter a valid number!"));
    assert!(run.output.contains("Please enter valid numbers!"));
    assert!(run.predictor.predictions().is_empty());
    assert_eq!(run.predictor.dataset().len(), 5);
}

#[test]
fn bulk_add_appends_every_point() {
    let dir = tempfile::tempdir().unwrap();
    let run = run_session(&dir, "3\n2\n6\n11\n7\n14\n8\n");

    assert!(run.output.contains("Bulk data added and model updated!"));
    assert_eq!(run.predictor.dataset().len(), 7);
    assert_eq!(Dataset::read(&data_path(&dir)).unwrap().len(), 7);
}

#[test]
fn bulk_add_keeps_points_before_a_bad_entry() {
    let dir = tempfile::tempdir().unwrap();
    let run = run_session(&dir, "3\n3\n6\n11\n7\nx\n8\n");

    assert!(run.output.contains("Please enter valid numbers!"));
    assert!(!run.output.contains("Bulk data added"));
    assert_eq!(run.predictor.dataset().len(), 6);
    assert_eq!(Dataset::read(&data_path(&dir)).unwrap().len(), 6);
}

#[test]
fn bulk_add_with_non_positive_count_adds_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let run = run_session(&dir, "3\n-2\n3\n0\n8\n");

    assert_eq!(run.output.matches("Bulk data added and model updated!").count(), 2);
    assert_eq!(run.predictor.dataset().len(), 5);
}

#[test]
fn accuracy_of_default_fit() {
    let dir = tempfile::tempdir().unwrap();
    let run = run_session(&dir, "4\n8\n");

    assert!(run.output.contains("Model accuracy (R² score): 1.00"));
    assert!(run.output.contains("Fit: y = 2.0000x"));
}

#[test]
fn non_utf8_number_is_reported_as_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let run = run_session_bytes(&dir, b"1\n\xff\xfe\n8\n");

    assert!(run.output.contains("Please enter a valid number!"));
    assert!(run.output.contains("Have a nice day!"));
    assert!(run.predictor.predictions().is_empty());
}

#[test]
fn non_utf8_menu_choice_is_an_invalid_option() {
    let dir = tempfile::tempdir().unwrap();
    let run = run_session_bytes(&dir, b"\xc3\n8\n");

    assert!(run.output.contains("Invalid option, please try again."));
    assert!(run.output.contains("Have a nice day!"));
}

#[test]
fn plot_after_a_prediction_saves_the_chart() {
    let dir = tempfile::tempdir().unwrap();
    let run = run_session(&dir, "1\n6\n5\n8\n");

    assert!(run.output.contains("Prediction chart saved to"));
    let chart = dir.path().join("predictions.png");
    assert!(fs::metadata(&chart).unwrap().len() > 0);
}

#[test]
fn plot_without_predictions_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let run = run_session(&dir, "5\n8\n");

    assert!(run.output.contains("No predictions made yet, make a prediction first."));
    assert!(!dir.path().join("predictions.png").exists());
}

#[test]
fn export_writes_header_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.csv");
    let input = format!("1\n6\n1\n7\n6\n{}\n8\n", out.display());
    let run = run_session(&dir, &input);

    assert!(run.output.contains("Predictions saved to"));
    let text = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Input,Prediction");
    assert!(lines[1].starts_with("6,"));
}

#[test]
fn export_failure_is_reported_and_menu_continues() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("missing").join("out.csv");
    let input = format!("1\n6\n6\n{}\n4\n8\n", bad.display());
    let run = run_session(&dir, &input);

    assert!(run.output.contains("Error while saving the file:"));
    assert!(run.output.contains("Model accuracy"));
    assert!(!bad.exists());
}

#[test]
fn reset_needs_confirmation() {
    let dir = tempfile::tempdir().unwrap();
    let run = run_session(&dir, "2\n6\n11\n1\n3\n7\nno\n8\n");

    assert!(!run.output.contains("Model reset!"));
    assert_eq!(run.predictor.dataset().len(), 6);
    assert_eq!(run.predictor.predictions().len(), 1);
}

#[test]
fn reset_restores_default_and_clears_predictions() {
    let dir = tempfile::tempdir().unwrap();
    let run = run_session(&dir, "2\n6\n11\n1\n3\n7\nEvet\n5\n8\n");

    assert!(run.output.contains("Model reset!"));
    assert_eq!(run.predictor.dataset(), &Dataset::default());
    assert!(run.predictor.predictions().is_empty());
    assert!(run.output.contains("No predictions made yet"));
    assert_eq!(Dataset::read(&data_path(&dir)).unwrap(), Dataset::default());
}

#[test]
fn unknown_choice_redisplays_menu() {
    let dir = tempfile::tempdir().unwrap();
    let run = run_session(&dir, "9\nhello\n+1\n01\n8\n");

    assert_eq!(run.output.matches("Invalid option, please try again.").count(), 4);
    assert_eq!(run.output.matches("--- Menu ---").count(), 5);
    assert!(!run.output.contains("Enter a number to predict"));
}

#[test]
fn end_of_input_ends_the_session() {
    let dir = tempfile::tempdir().unwrap();
    let run = run_session(&dir, "1\n6\n");

    assert_eq!(run.predictor.predictions().len(), 1);
    assert!(!run.output.contains("Have a nice day!"));
}

#[test]
fn end_of_input_mid_prompt_ends_the_session() {
    let dir = tempfile::tempdir().unwrap();
    let run = run_session(&dir, "2\n6\n");

    assert_eq!(run.predictor.dataset().len(), 5);
}

#[test]
fn existing_dataset_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(data_path(&dir), r#"{"X": [[0], [1]], "y": [1, 4]}"#).unwrap();
    let run = run_session(&dir, "1\n2\n8\n");

    assert!(run.output.contains("Predicted value for 2: 7.00"));
}
