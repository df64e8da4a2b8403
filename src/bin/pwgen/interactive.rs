//! A menu-driven front-end: show a password, let the user tweak the options, copy when happy.

use console::style;
use dialoguer::theme::ColorfulTheme;

use pwgen::session::{Action, State};
use pwgen::{Alphabet, Config, GenerationOptions, MAX_LENGTH, MIN_LENGTH};

use crate::ProgError;

enum MenuEntry {
    Apply(Action),
    ChangeLength,
    Copy,
    Quit,
}

pub(crate) fn run(config: &Config, options: GenerationOptions) -> Result<(), ProgError> {
    let theme = ColorfulTheme::default();
    let mut rng = rand::thread_rng();
    let mut state = State::new(&mut rng, options);

    loop {
        show(&state);
        let entries = menu(&state.options);
        let labels = entries.iter().map(|(label, _)| label.as_str()).collect::<Vec<_>>();
        let selection = dialoguer::Select::with_theme(&theme)
            .items(&labels)
            .default(0)
            .interact_opt()
            .map_err(ProgError::PromptFailed)?;
        let entry = match selection {
            Some(idx) => &entries[idx].1,
            None => return Ok(()),
        };

        state = match entry {
            MenuEntry::Apply(action) => state.apply(&mut rng, *action),
            MenuEntry::ChangeLength => {
                let length = prompt_length(&theme, state.options.length)?;
                state.apply(&mut rng, Action::SetLength(length))
            }
            MenuEntry::Copy => {
                crate::clipboard::copy_and_report(config, &state.password);
                state
            }
            MenuEntry::Quit => return Ok(()),
        };
    }
}

fn show(state: &State) {
    let entropy = Alphabet::for_options(&state.options).entropy_bits(state.options.length);
    eprintln!();
    eprintln!("  {}", style(state.password.as_str()).bold().cyan());
    eprintln!(
        "  {}",
        style(format!(
            "length {}, {:.1} bits of entropy",
            state.options.length, entropy
        ))
        .dim()
    );
    eprintln!();
}

fn menu(options: &GenerationOptions) -> Vec<(String, MenuEntry)> {
    let check = |on: bool| if on { "[x]" } else { "[ ]" };
    vec![
        (
            "Generate new password".to_owned(),
            MenuEntry::Apply(Action::Regenerate),
        ),
        (
            format!("Change length ({})", options.length),
            MenuEntry::ChangeLength,
        ),
        (
            format!("{} Include numbers", check(options.include_numbers)),
            MenuEntry::Apply(Action::ToggleNumbers),
        ),
        (
            format!(
                "{} Include special characters",
                check(options.include_special_chars)
            ),
            MenuEntry::Apply(Action::ToggleSpecialChars),
        ),
        ("Copy to clipboard".to_owned(), MenuEntry::Copy),
        ("Quit".to_owned(), MenuEntry::Quit),
    ]
}

fn prompt_length(theme: &ColorfulTheme, current: usize) -> Result<usize, ProgError> {
    dialoguer::Input::<usize>::with_theme(theme)
        .with_prompt(format!("Password length ({MIN_LENGTH}-{MAX_LENGTH})"))
        .default(current)
        .validate_with(|length: &usize| -> Result<(), String> {
            if (MIN_LENGTH..=MAX_LENGTH).contains(length) {
                Ok(())
            } else {
                Err(format!(
                    "must be between {MIN_LENGTH} and {MAX_LENGTH}"
                ))
            }
        })
        .interact_text()
        .map_err(ProgError::PromptFailed)
}
