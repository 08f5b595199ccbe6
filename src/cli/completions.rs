use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    setup-bun completions bash > ~/.bash_completion.d/setup-bun\n\n\
                  Generate zsh completions:\n    setup-bun completions zsh > ~/.zfunc/_setup-bun\n\n\
                  Generate fish completions:\n    setup-bun completions fish > ~/.config/fish/completions/setup-bun.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
