use fuzz_frame_rs::{process_input, DecodeMode, FuzzFrame};

fn main() -> anyhow::Result<()> {
    for arg in std::env::args().skip(1) {
        let data = std::fs::read(&arg)?;
        println!("{}: {} bytes", arg, data.len());
        for mode in [DecodeMode::Strict, DecodeMode::Native] {
            match FuzzFrame::from(&data, mode) {
                Ok(frame) => println!(
                    "  {:?}: payload of {} bytes at offset {}",
                    mode,
                    frame.declared_len(),
                    frame.payload_offset(),
                ),
                Err(err) => println!("  {:?}: {}", mode, err),
            }
            println!("  {:?}: process_input -> {:?}", mode, process_input(&data, mode));
        }
    }
    Ok(())
}
