mod support;

use support::Scratch;
use umm_judge::{
    Judge, JudgeError, Rejection, Verdict, constants::EPSILON, input::TestInput, judge_texts,
    reference::reference_answer,
};

#[test]
fn judge_reads_both_files() {
    let dir = Scratch::new();
    let input = dir.write("input.txt", "2 3 5\noperation=multiply\n");
    let submission = dir.write("user.txt", "30.0000004\n");

    let report = Judge::builder()
        .input_path(input)
        .submission_path(submission)
        .build()
        .run()
        .expect("judge");

    assert_eq!(report.verdict, Verdict::Accepted);
    assert_eq!(report.reference, 30.0);
    assert_eq!(report.tolerance, EPSILON);
}

#[test]
fn missing_files_are_setup_errors() {
    let dir = Scratch::new();
    let input = dir.write("input.txt", "1\n");
    let missing = dir.path().join("nope.txt");

    let err = Judge::builder()
        .input_path(missing.clone())
        .submission_path(input.clone())
        .build()
        .run()
        .expect_err("input is missing");
    assert!(matches!(err, JudgeError::Setup { .. }));
    assert_eq!(err.path(), missing.as_path());

    let err = Judge::builder()
        .input_path(input)
        .submission_path(missing.clone())
        .build()
        .run()
        .expect_err("submission is missing");
    assert_eq!(err.path(), missing.as_path());
}

#[test]
fn test_input_from_path_matches_parse() {
    let dir = Scratch::new();
    let text = "4 0.25\noperation=multiply\nround_to=1\n";
    let path = dir.write("input.txt", text);

    let input = TestInput::from_path(&path).expect("read input");
    assert_eq!(input, TestInput::parse(text));
    assert_eq!(reference_answer(&input), 1.0);
}

#[test]
fn sum_and_product_match_arithmetic() {
    let args = [1.5, -2.0, 4.0, 0.5, 10.0];
    let line = args.map(|a| a.to_string()).join(" ");

    let sum = reference_answer(&TestInput::parse(&line));
    assert_eq!(sum, args.iter().fold(0.0, |acc, x| acc + x));

    let product = reference_answer(&TestInput::parse(&format!("{line}\noperation=multiply")));
    assert_eq!(product, args.iter().fold(1.0, |acc, x| acc * x));
}

#[test]
fn boundary_of_tolerance() {
    assert_eq!(
        judge_texts("0", &format!("{EPSILON:e}"), EPSILON).verdict,
        Verdict::Rejected(Rejection::WrongAnswer)
    );
    assert_eq!(
        judge_texts("0", &format!("{:e}", EPSILON * 0.999), EPSILON).verdict,
        Verdict::Accepted
    );
}
