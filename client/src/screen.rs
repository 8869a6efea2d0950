use crate::probe::{ProbeError, StatusProbe};
use botdo_shared::{ConnectionStatus, StatusKind};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use tokio::sync::oneshot::{self, error::TryRecvError};

pub const PLANNED_FEATURES: [&str; 5] = [
    "📨 Send messages to Slack",
    "📥 Receive messages from Slack",
    "📨 Send messages to Whapi",
    "📥 Receive messages from Whapi",
    "🔗 Integration with Digital Ocean Agent",
];

type Outcome = Result<String, ProbeError>;

/// The status screen: static content plus the backend connection badge
pub struct StatusScreen {
    status: ConnectionStatus,
    /// Present until the screen is activated
    probe: Option<StatusProbe>,
    pending: Option<oneshot::Receiver<Outcome>>,
}

impl StatusScreen {
    pub fn new(probe: StatusProbe) -> Self {
        Self {
            status: ConnectionStatus::Checking,
            probe: Some(probe),
            pending: None,
        }
    }

    pub fn status(&self) -> &ConnectionStatus {
        &self.status
    }

    /// Start the probe. Must be called from within a tokio runtime.
    ///
    /// Only the first call sends a request.
    pub fn activate(&mut self) {
        let Some(probe) = self.probe.take() else {
            tracing::debug!("Screen already activated, not probing again");
            return;
        };

        let (tx, rx) = oneshot::channel();
        self.pending = Some(rx);

        tokio::spawn(async move {
            let outcome = probe.check().await;
            // Receiver gone means the screen was torn down first
            let _ = tx.send(outcome);
        });
    }

    /// Apply the probe outcome if it has arrived. Never blocks.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = self.pending.as_mut() else {
            return false;
        };

        match rx.try_recv() {
            Ok(outcome) => {
                self.pending = None;
                self.apply(outcome)
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Closed) => {
                self.pending = None;
                self.apply_lost()
            }
        }
    }

    /// Wait for the probe outcome and apply it
    pub async fn settle(&mut self) -> bool {
        let Some(rx) = self.pending.take() else {
            return false;
        };

        match rx.await {
            Ok(outcome) => self.apply(outcome),
            Err(_) => self.apply_lost(),
        }
    }

    fn apply(&mut self, outcome: Outcome) -> bool {
        match &outcome {
            Ok(message) => tracing::info!("Backend connected: {}", message),
            Err(e) => tracing::error!("Backend connection error: {}", e),
        }
        self.status.resolve(outcome)
    }

    fn apply_lost(&mut self) -> bool {
        tracing::error!("Probe task ended without reporting a result");
        self.status.resolve::<&str>(Err("probe task ended without a result"))
    }

    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Min(7),
                Constraint::Length(7),
                Constraint::Length(3),
            ])
            .split(frame.size());

        render_header(frame, chunks[0]);
        render_hello(frame, chunks[1]);
        self.render_backend(frame, chunks[2]);
        render_features(frame, chunks[3]);
        render_footer(frame, chunks[4]);
    }

    fn render_backend(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title("Backend Connection")
            .borders(Borders::ALL);

        let mut lines = vec![
            Line::from(Span::styled(
                format!(" {} ", self.status.badge()),
                badge_style(self.status.kind()),
            )),
            Line::from(self.status.backend_message().to_string()),
        ];
        if let Some(detail) = self.status.error_detail() {
            lines.push(Line::from(Span::styled(
                format!("Error: {}", detail),
                Style::default().fg(Color::Red),
            )));
        }

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, area);
    }

    /// Plain-text rendering for non-terminal output
    pub fn summary(&self) -> String {
        let mut out = format!(
            "Backend Connection: {}\n{}\n",
            self.status.badge(),
            self.status.backend_message()
        );
        if let Some(detail) = self.status.error_detail() {
            out.push_str(&format!("Error: {}\n", detail));
        }
        out
    }
}

fn badge_style(kind: StatusKind) -> Style {
    let color = match kind {
        StatusKind::Checking => Color::Yellow,
        StatusKind::Connected => Color::Green,
        StatusKind::Error => Color::Red,
    };
    Style::default()
        .fg(Color::Black)
        .bg(color)
        .add_modifier(Modifier::BOLD)
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "🤖 BotDO",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Slack & Whapi Integration Bot",
            Style::default().fg(Color::Gray),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}

fn render_hello(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Hello World from the terminal! 👋",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("Frontend is running successfully"),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}

fn render_features(frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = PLANNED_FEATURES
        .iter()
        .map(|feature| ListItem::new(*feature))
        .collect();
    let list = List::new(items).block(
        Block::default()
            .title("Planned Features")
            .borders(Borders::ALL),
    );

    frame.render_widget(list, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new("Ready for development  ·  press q to quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
