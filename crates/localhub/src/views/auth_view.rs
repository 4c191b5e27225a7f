use super::centered;
use crate::domain_models::{password_strength, AuthField, AuthScreen, PasswordStrength};
use crate::state::AuthState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn title(screen: AuthScreen) -> &'static str {
    match screen {
        AuthScreen::Login => "Log in",
        AuthScreen::SignUp => "Sign up",
        AuthScreen::ForgotPassword => "Forgot password",
        AuthScreen::PasswordChanged => "Password reset",
    }
}

fn label(field: AuthField) -> &'static str {
    match field {
        AuthField::Name => "Name",
        AuthField::Email => "Email",
        AuthField::Password => "Password",
        AuthField::ConfirmPassword => "Confirm password",
    }
}

fn strength_span(strength: PasswordStrength) -> Span<'static> {
    match strength {
        PasswordStrength::Weak => "Weak".red(),
        PasswordStrength::Medium => "Medium".yellow(),
        PasswordStrength::Good => "Good".light_green(),
        PasswordStrength::Strong => "Strong".green().bold(),
    }
}

/// Login, sign-up and password reset forms
pub fn render(state: &AuthState, area: Rect, f: &mut Frame) {
    let mut lines = Vec::new();

    if state.screen == AuthScreen::PasswordChanged {
        lines.push(Line::from("A reset link is on its way to your inbox."));
        lines.push(Line::from(""));
        lines.push(Line::from("Press Enter to return to log in.".dim()));
    } else {
        for field in state.screen.fields() {
            let value = state.form.field(*field);
            let shown = match field {
                AuthField::Password | AuthField::ConfirmPassword => "•".repeat(value.chars().count()),
                _ => value.to_string(),
            };
            let style = if *field == state.focus {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{:>17}: ", label(*field)), style),
                Span::raw(shown),
            ]));

            if state.screen == AuthScreen::SignUp && *field == AuthField::Password {
                if let Some(strength) = password_strength(value) {
                    lines.push(Line::from(vec![
                        Span::raw(format!("{:>17}  ", "")),
                        strength_span(strength),
                    ]));
                }
            }
        }

        if state.screen == AuthScreen::SignUp {
            let check = if state.form.agree_to_terms { "[x]" } else { "[ ]" };
            lines.push(Line::from(format!(
                "{:>17}  {} I agree to the terms (Ctrl+T)",
                "", check
            )));
        }

        lines.push(Line::from(""));
        if let Some(error) = &state.error {
            lines.push(Line::from(error.to_string().red()));
        } else if state.loading {
            lines.push(Line::from("Please wait…".yellow()));
        } else {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(
            "Tab next field · Enter submit · Ctrl+L log in · Ctrl+N sign up · Ctrl+F forgot · Ctrl+G Google"
                .dim(),
        ));
    }

    let rect = centered(area, 100, lines.len() as u16 + 2);
    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", title(state.screen))),
    );
    f.render_widget(form, rect);
}
