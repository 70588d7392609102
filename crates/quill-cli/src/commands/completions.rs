use std::fs;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::aot::Generator;
use clap_complete::{generate, shells};

use crate::cli::{Cli, CompletionShell};
use crate::error::CliError;

pub fn run_completions(shell: CompletionShell, output: Option<&Path>) -> Result<(), CliError> {
    let mut command = Cli::command();
    let mut buffer: Vec<u8> = Vec::new();
    match shell {
        CompletionShell::Bash => generate_for_shell(shells::Bash, &mut command, &mut buffer),
        CompletionShell::Zsh => generate_for_shell(shells::Zsh, &mut command, &mut buffer),
        CompletionShell::Fish => generate_for_shell(shells::Fish, &mut command, &mut buffer),
    }
    match output {
        Some(path) => {
            fs::write(path, &buffer)?;
            println!("{}", path.display());
        }
        None => {
            print!("{}", String::from_utf8_lossy(&buffer));
        }
    }
    Ok(())
}

fn generate_for_shell<G: Generator>(
    generator: G,
    command: &mut clap::Command,
    buffer: &mut Vec<u8>,
) {
    let name = command.get_name().to_string();
    generate(generator, command, name, buffer);
}
