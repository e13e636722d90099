use fuzz_frame_rs::{process_input, DecodeMode, ProcessOutcome};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Serialize, Deserialize)]
struct Testcase {
    mode: String,
    content: Vec<u8>,
    expected: String,
}

fn outcome_name(outcome: ProcessOutcome) -> &'static str {
    match outcome {
        ProcessOutcome::Processed => "processed",
        ProcessOutcome::EmptyInput => "empty-input",
        ProcessOutcome::Malformed => "malformed",
        ProcessOutcome::AllocationFailed => "allocation-failed",
    }
}

fn main() -> anyhow::Result<()> {
    for arg in std::env::args().skip(1) {
        let payload = arg.as_bytes();
        let mut content = Vec::with_capacity(12 + payload.len());
        content.extend_from_slice(b"FUZZ");
        content.extend_from_slice(&(payload.len() as u64).to_le_bytes());
        content.extend_from_slice(payload);

        let expected = outcome_name(process_input(&content, DecodeMode::Strict));
        let testcase = Testcase {
            mode: "strict".to_string(),
            content,
            expected: expected.to_string(),
        };
        let out_path = PathBuf::from("testcases").join(format!("strict_{}.json", arg));
        let file = std::fs::File::create(&out_path)?;
        serde_json::to_writer(file, &testcase)?;
        println!("Saved to {}", out_path.display());
    }
    Ok(())
}
