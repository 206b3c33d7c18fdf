// Vardeco demo: inspect sample runtime values in a variables pane

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use vardeco::inspect::SampleValue;
use vardeco::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let entries = sample_entries();

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(entries);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}

/// Sample values resembling what a halted debugger session would expose
fn sample_entries() -> Vec<(String, SampleValue)> {
    let request = SampleValue::Object {
        class_name: "HttpRequest".to_string(),
        address: 0x7f9a_1c04_d218,
        summary: "GET /orders?page=2 HTTP/1.1".to_string(),
        fields: vec![
            (
                "method".to_string(),
                SampleValue::Str("GET".to_string()),
            ),
            (
                "path".to_string(),
                SampleValue::Str("/orders?page=2&per_page=50&sort=created_at".to_string()),
            ),
            (
                "headers".to_string(),
                SampleValue::Hash(vec![
                    (
                        "host".to_string(),
                        SampleValue::Str("api.example.com".to_string()),
                    ),
                    (
                        "accept".to_string(),
                        SampleValue::Str("application/json".to_string()),
                    ),
                    ("content-length".to_string(), SampleValue::Int(0)),
                ]),
            ),
            (
                "body_stream".to_string(),
                SampleValue::Unreadable("closed stream".to_string()),
            ),
            ("retries".to_string(), SampleValue::Int(3)),
            ("timeout_s".to_string(), SampleValue::Float(2.5)),
            ("secure".to_string(), SampleValue::Bool(true)),
            ("response".to_string(), SampleValue::Nil),
        ],
    };

    let samples = SampleValue::Array(vec![
        SampleValue::Int(1),
        SampleValue::Int(1),
        SampleValue::Int(2),
        SampleValue::Int(3),
        SampleValue::Int(5),
        SampleValue::Int(8),
        SampleValue::Str("thirteen".to_string()),
        SampleValue::Array(vec![SampleValue::Int(21), SampleValue::Int(34)]),
    ]);

    let config = SampleValue::Hash(vec![
        (
            "database_url".to_string(),
            SampleValue::Str("postgres://localhost:5432/app_development".to_string()),
        ),
        ("pool_size".to_string(), SampleValue::Int(5)),
        ("verbose".to_string(), SampleValue::Bool(false)),
        (
            "log_path".to_string(),
            SampleValue::Str("/var/log/app\tcurrent.log".to_string()),
        ),
    ]);

    let message = SampleValue::Str(
        "multi-line payload:\n{\"status\": \"ok\", \"items\": [1, 2, 3]}".to_string(),
    );

    vec![
        ("request".to_string(), request),
        ("samples".to_string(), samples),
        ("config".to_string(), config),
        ("message".to_string(), message),
    ]
}
