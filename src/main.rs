use anyhow::Result;
use clap::Parser;

use inst::Invocation;

mod inst;
mod render;

/// Generate an instruction class shell.
///
/// Example: instgen SET Set8 int bitIndex Register8 r8
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Mnemonic for the instruction
    mnemonic: String,

    /// Class name (without the Instruction suffix)
    class_name: String,

    /// Pairs of type and lowerCamelCase name, space-separated
    arguments: Vec<String>,
}

fn run(args: Args) -> Result<String> {
    let arguments = inst::pair_arguments(&args.arguments)?;
    let invocation = Invocation::new(args.mnemonic, args.class_name, arguments);
    Ok(render::render(&invocation))
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    match run(args) {
        Ok(class_text) => println!("{}", class_text),
        Err(e) => {
            log::error!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
