use crate::application::{App, AppMode};
use crate::domain::{ButtonKind, Key, Keypad};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_body(f, app, chunks[1]);
    render_status_bar(f, app, chunks[2]);

    if matches!(app.mode, AppMode::Help) {
        render_help_popup(f, app.help_scroll);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!(
        "tcalc - Terminal Calculator | Button: {}",
        app.selected_key().label()
    ))
    .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn render_body(f: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(28), Constraint::Length(26)])
        .split(area);

    render_calculator(f, app, columns[0]);
    render_tape(f, app, columns[1]);
}

fn render_calculator(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    render_display(f, app, chunks[0]);
    for (index, keys) in Keypad::rows().into_iter().enumerate() {
        render_keypad_row(f, app, keys, index, chunks[index + 1]);
    }
}

fn render_display(f: &mut Frame, app: &App, area: Rect) {
    let display_style = if app.calculator.display == "Error" {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(Span::styled(
            app.pending_expression().unwrap_or_default(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(app.calculator.display.clone(), display_style)),
    ];

    let display = Paragraph::new(lines)
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::ALL).title("Display"));
    f.render_widget(display, area);
}

fn render_keypad_row(f: &mut Frame, app: &App, keys: &[Key], row_index: usize, area: Rect) {
    let constraints: Vec<Constraint> = if keys.len() == 4 {
        vec![Constraint::Ratio(1, 4); 4]
    } else {
        vec![
            Constraint::Ratio(2, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ]
    };

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (col_index, &key) in keys.iter().enumerate() {
        let style = if row_index == app.selected_row && col_index == app.selected_col {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            match Keypad::kind(key) {
                ButtonKind::Filled => Style::default().fg(Color::Cyan),
                ButtonKind::Action => Style::default().fg(Color::Yellow),
                ButtonKind::Plain => Style::default(),
            }
        };

        let button = Paragraph::new(key.label())
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(button, cells[col_index]);
    }
}

fn render_tape(f: &mut Frame, app: &App, area: Rect) {
    let visible_rows = area.height.saturating_sub(2) as usize;
    let start = app.history.len().saturating_sub(visible_rows);

    let lines: Vec<Line> = app
        .history
        .iter()
        .skip(start)
        .map(|entry| {
            Line::from(vec![
                Span::styled(
                    format!("{} = ", entry.expression),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(entry.result.clone()),
            ])
        })
        .collect();

    let tape = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Tape"));
    f.render_widget(tape, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let input_text = match app.mode {
        AppMode::Normal => {
            if let Some(ref status) = app.status_message {
                status.clone()
            } else {
                "Type digits and operators | Enter: press button | y: copy result | F1/?: help | q: quit".to_string()
            }
        }
        AppMode::Help => "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help".to_string(),
    };

    let input = Paragraph::new(input_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Normal => Style::default(),
            AppMode::Help => Style::default().fg(Color::Cyan),
        });
    f.render_widget(input, area);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_text = get_help_text();
    let help_lines: Vec<&str> = help_text.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!("tcalc Calculator Help (Line {}/{})", start_line + 1, help_lines.len()))
            .style(Style::default().fg(Color::Cyan)))
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

fn get_help_text() -> String {
    r#"TCALC CALCULATOR REFERENCE

=== BASIC CONCEPTS ===
• The display shows the number being typed or the latest result
• The dim line above it shows the captured operand and pending operator
• Operators chain left to right with no precedence, like a desk calculator
• Every resolved calculation is appended to the tape on the right

=== TYPING KEYS ===
0-9             Enter digits
.               Decimal point (one per number)
+ -             Add, subtract
* x ×           Multiply
/ ÷             Divide
= or Enter      Compute the pending operation
%               Convert the display to a percentage
Backspace       Delete the last typed digit
c or Delete     Clear everything (AC)

=== KEYPAD NAVIGATION ===
Arrow keys      Move the button highlight (hjkl also work)
Enter           Press the highlighted button
                Typing a key always works too; the highlight is optional

=== WORKED EXAMPLES ===
2 + 3 =         5
2 + 3 × 4 =     20    (chains as (2+3)×4, no precedence)
5 + × 3 =       15    (second operator replaces the first)
7 + =           14    (equals reuses the captured 7)
50 %            0.5
50 + 10 % =     55    (percent of the captured 50)
5 ÷ 0 =         Error

=== ERROR STATE ===
Division by zero shows Error in red. The Error text is not a number:
AC resets everything, and typing a digit or . simply starts a fresh
entry. An operator pressed on Error captures 0 as the operand.

=== CLIPBOARD ===
y               Copy the current display text to the system clipboard
                The status bar confirms the copy or reports a failure

=== HELP NAVIGATION ===
↑↓ or j/k       Scroll help text up/down one line
Page Up/Down    Scroll help text up/down 5 lines
Home            Jump to top of help text
Esc/F1/?/q      Close this help window

Press q in the main screen to quit."#.to_string()
}
