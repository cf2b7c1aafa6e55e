use std::sync::Arc;

use chrono::NaiveDate;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table},
    Frame,
};

use crate::api::LpApi;
use crate::error::Result;
use crate::fetcher::{FetchOutcome, Fetcher};
use crate::render::{render, RenderedReport};
use crate::selector::Selector;
use super::parse_date;
use crate::tui::{
    run_app, App, AppAction, DateField, FOCUSED_STYLE, FOOTER_STYLE, HEADER_STYLE, IRR_STYLE,
    KEY_STYLE, SECTION_STYLE, SELECTED_STYLE,
};

/// Rows of the LP picker shown at once.
const PICKER_ROWS: u16 = 6;

#[derive(Clone, Copy, PartialEq, Debug)]
enum Focus {
    LpPicker,
    DatePicker,
}

pub struct Dashboard {
    selector: Selector,
    fetcher: Fetcher,
    date: DateField,
    focus: Focus,
    lp_cursor: ListState,
    /// Text typed into the date control, while typed entry is open.
    date_input: Option<String>,
    offset: usize,
    visible_count: usize,
    clock: Box<dyn Fn() -> NaiveDate>,
}

impl Dashboard {
    /// Build the dashboard and issue the one-off LP listing call. `clock`
    /// supplies today's date; it is read again on every tick.
    pub fn new(api: Arc<dyn LpApi>, clock: impl Fn() -> NaiveDate + 'static) -> Self {
        let today = clock();
        let fetcher = Fetcher::new(api);
        fetcher.load_lps();
        Self {
            selector: Selector::new(today),
            fetcher,
            date: DateField::new(today, today),
            focus: Focus::LpPicker,
            lp_cursor: ListState::default(),
            date_input: None,
            offset: 0,
            visible_count: 20,
            clock: Box::new(clock),
        }
    }

    /// Follow the clock across midnight so the new day becomes selectable.
    fn refresh_today(&mut self) {
        let today = (self.clock)();
        if today == self.selector.today() {
            return;
        }
        tracing::info!(%today, "date bound moved");
        self.selector.set_today(today);
        self.date.set_max(today);
        self.commit_date();
    }

    fn apply(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Lps(result) => {
                self.selector.apply_lps(result);
                if !self.selector.lps().is_empty() {
                    self.lp_cursor.select(Some(0));
                }
            }
            FetchOutcome::Report(request, result) => {
                let had_report = self.selector.report().is_some();
                self.selector.apply_report(&request, result);
                if had_report != self.selector.report().is_some() {
                    self.offset = 0;
                }
            }
        }
    }

    fn choose_lp(&mut self) {
        let Some(idx) = self.lp_cursor.selected() else {
            return;
        };
        let Some(id) = self.selector.lps().get(idx).cloned() else {
            return;
        };
        if self.selector.selected_lp() == Some(id.as_str()) {
            return;
        }
        if let Some(request) = self.selector.select_lp(&id) {
            self.fetcher.fetch_report(request);
        }
    }

    /// Push the date control's value into the selection if it changed.
    fn commit_date(&mut self) {
        let date = self.date.value();
        if date == self.selector.report_date() {
            return;
        }
        match self.selector.select_report_date(date) {
            Ok(Some(request)) => self.fetcher.fetch_report(request),
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "date rejected"),
        }
    }

    fn handle_date_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left => self.date.step_days(-1),
            KeyCode::Right => self.date.step_days(1),
            KeyCode::Up => self.date.step_months(1),
            KeyCode::Down => self.date.step_months(-1),
            KeyCode::Char('t') => self.date.reset_to_max(),
            KeyCode::Char('e') => {
                self.date_input = Some(String::new());
                return;
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                self.date_input = Some(c.to_string());
                return;
            }
            _ => return,
        }
        self.commit_date();
    }

    /// Keys while typed entry is open. Nothing here quits.
    fn handle_date_input(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => self.submit_date_input(),
            KeyCode::Esc => self.date_input = None,
            KeyCode::Backspace => {
                if let Some(text) = self.date_input.as_mut() {
                    text.pop();
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
                if let Some(text) = self.date_input.as_mut() {
                    if text.len() < 10 {
                        text.push(c);
                    }
                }
            }
            _ => {}
        }
    }

    /// Parse the typed `YYYY-MM-DD` text. Unparseable text stays open for correction.
    fn submit_date_input(&mut self) {
        let Some(text) = self.date_input.take() else {
            return;
        };
        match parse_date(&text) {
            Ok(date) => {
                self.date.set(date);
                self.commit_date();
            }
            Err(e) => {
                tracing::warn!(error = %e, "typed date rejected");
                self.date_input = Some(text);
            }
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.selector.lps().len();
        if len == 0 {
            return;
        }
        let current = self.lp_cursor.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1) as usize;
        self.lp_cursor.select(Some(next));
    }

    fn report_rows(rendered: &RenderedReport) -> Vec<Row<'static>> {
        let mut rows = Vec::new();
        for section in &rendered.sections {
            rows.push(Row::new([
                Cell::from(Span::styled(section.title, SECTION_STYLE)),
                Cell::from(""),
            ]));
            for (key, value) in &section.rows {
                rows.push(Row::new([
                    Cell::from(Span::styled(format!("  {key}"), KEY_STYLE)),
                    Cell::from(value.clone()),
                ]));
            }
            rows.push(Row::new([Cell::from(""), Cell::from("")]));
        }
        rows
    }

    fn draw_controls(&mut self, frame: &mut Frame, area: Rect) {
        let [lp_area, date_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(area);

        let border = |focus: Focus| {
            if self.focus == focus {
                FOCUSED_STYLE
            } else {
                FOOTER_STYLE
            }
        };
        let lp_block = Block::default()
            .borders(Borders::ALL)
            .border_style(border(Focus::LpPicker))
            .title(" Select LP ");
        let date_block = Block::default()
            .borders(Borders::ALL)
            .border_style(border(Focus::DatePicker))
            .title(" Report Date ");

        if self.selector.lps().is_empty() {
            frame.render_widget(
                Paragraph::new(" (no LPs)").style(FOOTER_STYLE).block(lp_block),
                lp_area,
            );
        } else {
            let selected = self.selector.selected_lp();
            let items: Vec<ListItem> = self
                .selector
                .lps()
                .iter()
                .map(|lp| {
                    let marker = if selected == Some(lp.as_str()) { "\u{25cf} " } else { "  " };
                    ListItem::new(format!("{marker}{lp}"))
                })
                .collect();
            let list = List::new(items)
                .block(lp_block)
                .highlight_style(SELECTED_STYLE);
            frame.render_stateful_widget(list, lp_area, &mut self.lp_cursor);
        }

        let shown = match &self.date_input {
            Some(text) => format!(" {text}_"),
            None => format!(" {}", self.date.value().format("%Y-%m-%d")),
        };
        let date_lines = vec![
            Line::from(Span::styled(shown, KEY_STYLE)),
            Line::from(Span::styled(
                format!(" latest {}", self.selector.today().format("%Y-%m-%d")),
                FOOTER_STYLE,
            )),
        ];
        frame.render_widget(Paragraph::new(date_lines).block(date_block), date_area);
    }

    fn draw_report(&mut self, frame: &mut Frame, area: Rect) {
        let Some(rendered) = render(self.selector.report()) else {
            return;
        };

        let [table_area, irr_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

        let rows = Self::report_rows(&rendered);
        self.visible_count = (table_area.height as usize).max(1);
        let max = rows.len().saturating_sub(self.visible_count);
        self.offset = self.offset.min(max);

        let visible: Vec<Row> = rows
            .into_iter()
            .skip(self.offset)
            .take(self.visible_count)
            .collect();
        let table =
            Table::new(visible, [Constraint::Fill(1), Constraint::Fill(1)]).column_spacing(2);
        frame.render_widget(table, table_area);

        let irr_line = Line::from(vec![
            Span::styled(" IRR: ", HEADER_STYLE),
            Span::styled(rendered.irr.clone(), IRR_STYLE),
            Span::styled(format!(" (as of PCAP Date: {})", rendered.pcap_date), Style::default()),
        ]);
        frame.render_widget(Paragraph::new(irr_line), irr_area);
    }
}

impl App for Dashboard {
    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let [header_area, sep1, controls_area, sep2, content_area, footer_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(PICKER_ROWS + 2),
                Constraint::Length(1),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .areas(area);

        let title = match self.selector.report().and_then(|r| r.report_date.as_deref()) {
            Some(date) => format!(" LP Investment Dashboard  (report {date})"),
            None => " LP Investment Dashboard".to_string(),
        };
        frame.render_widget(Paragraph::new(title).style(HEADER_STYLE), header_area);

        let sep = Paragraph::new("\u{2501}".repeat(area.width as usize)).style(FOOTER_STYLE);
        frame.render_widget(sep.clone(), sep1);
        frame.render_widget(sep, sep2);

        self.draw_controls(frame, controls_area);
        self.draw_report(frame, content_area);

        let hints = match (self.focus, &self.date_input) {
            (_, Some(_)) => " YYYY-MM-DD  Enter=set  Backspace=delete  Esc=cancel",
            (Focus::LpPicker, None) => {
                " \u{2191}/\u{2193}=move  Enter=select  Tab=date  j/k=scroll  q=quit"
            }
            (Focus::DatePicker, None) => {
                " \u{2190}/\u{2192}=day  \u{2191}/\u{2193}=month  t=today  e=type  Tab=LP  q=quit"
            }
        };
        frame.render_widget(Paragraph::new(hints).style(FOOTER_STYLE), footer_area);
    }

    fn handle_key(&mut self, code: KeyCode) -> AppAction {
        if self.date_input.is_some() {
            self.handle_date_input(code);
            return AppAction::Continue;
        }
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::LpPicker => Focus::DatePicker,
                    Focus::DatePicker => Focus::LpPicker,
                };
            }
            KeyCode::Char('j') => self.offset = self.offset.saturating_add(1),
            KeyCode::Char('k') => self.offset = self.offset.saturating_sub(1),
            KeyCode::PageDown => self.offset = self.offset.saturating_add(self.visible_count),
            KeyCode::PageUp => self.offset = self.offset.saturating_sub(self.visible_count),
            _ => match self.focus {
                Focus::LpPicker => match code {
                    KeyCode::Up => self.move_cursor(-1),
                    KeyCode::Down => self.move_cursor(1),
                    KeyCode::Home => self.move_cursor(-(self.selector.lps().len() as isize)),
                    KeyCode::End => self.move_cursor(self.selector.lps().len() as isize),
                    KeyCode::Enter => self.choose_lp(),
                    _ => {}
                },
                Focus::DatePicker => self.handle_date_key(code),
            },
        }
        AppAction::Continue
    }

    fn tick(&mut self) {
        self.refresh_today();
        for outcome in self.fetcher.drain() {
            self.apply(outcome);
        }
    }
}

pub fn run(api_url: Option<&str>) -> Result<()> {
    let api = super::api_client(api_url)?;
    let mut dashboard = Dashboard::new(Arc::new(api), super::today);
    run_app(&mut dashboard)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::fetcher::testing::FakeApi;
    use crate::models::Report;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn fixed(today: NaiveDate) -> impl Fn() -> NaiveDate {
        move || today
    }

    fn report(json: &str) -> Report {
        serde_json::from_str(json).unwrap()
    }

    const LP2_REPORT: &str = r#"{
        "lp_info": {"Name": "Acme"},
        "fund_data": {"NAV": 500000},
        "totals": {"Capital Called": 100000},
        "irr": 0.12,
        "pcap_report_date": "2023-12-31"
    }"#;

    fn fake_api() -> Arc<FakeApi> {
        let mut reports = HashMap::new();
        reports.insert("LP2".to_string(), report(LP2_REPORT));
        Arc::new(FakeApi {
            lps: Some(vec!["LP1".into(), "LP2".into()]),
            reports,
            ..Default::default()
        })
    }

    /// Tick until `done` holds, or give up after a couple of seconds.
    fn tick_until(dash: &mut Dashboard, done: impl Fn(&Dashboard) -> bool) {
        let deadline = Instant::now() + Duration::from_secs(2);
        while !done(dash) && Instant::now() < deadline {
            dash.tick();
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    /// Tick for a short while so any in-flight outcomes are applied.
    fn settle(dash: &mut Dashboard) {
        let deadline = Instant::now() + Duration::from_millis(200);
        while Instant::now() < deadline {
            dash.tick();
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    fn screen(dash: &mut Dashboard) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| dash.draw(f)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_lp_list_loaded_at_startup() {
        let api = fake_api();
        let mut dash = Dashboard::new(api, fixed(date("2024-01-01")));
        tick_until(&mut dash, |d| !d.selector.lps().is_empty());
        assert_eq!(dash.selector.lps(), ["LP1", "LP2"]);
        assert_eq!(dash.lp_cursor.selected(), Some(0));
    }

    #[test]
    fn test_no_report_before_first_fetch() {
        let mut dash = Dashboard::new(fake_api(), fixed(date("2024-01-01")));
        tick_until(&mut dash, |d| !d.selector.lps().is_empty());
        let text = screen(&mut dash);
        assert!(text.contains("LP1"));
        assert!(!text.contains("LP Info"));
        assert!(!text.contains("IRR:"));
    }

    #[test]
    fn test_select_lp_fetches_and_renders_report() {
        let api = fake_api();
        let mut dash = Dashboard::new(api.clone(), fixed(date("2024-01-01")));
        tick_until(&mut dash, |d| !d.selector.lps().is_empty());

        dash.handle_key(KeyCode::Down);
        dash.handle_key(KeyCode::Enter);
        tick_until(&mut dash, |d| d.selector.report().is_some());

        assert_eq!(
            *api.requested.lock().unwrap(),
            vec!["/api/lp/LP2?report_date=2024-01-01".to_string()]
        );
        let text = screen(&mut dash);
        assert!(text.contains("LP Info"));
        assert!(text.contains("Fund Data"));
        assert!(text.contains("Totals"));
        assert!(text.contains("$500,000.00"));
        assert!(text.contains("IRR: 12.00% (as of PCAP Date: 2023-12-31)"));
    }

    #[test]
    fn test_reselecting_same_lp_does_not_refetch() {
        let api = fake_api();
        let mut dash = Dashboard::new(api.clone(), fixed(date("2024-01-01")));
        tick_until(&mut dash, |d| !d.selector.lps().is_empty());
        dash.handle_key(KeyCode::Down);
        dash.handle_key(KeyCode::Enter);
        dash.handle_key(KeyCode::Enter);
        settle(&mut dash);
        assert_eq!(api.requested.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_date_change_refetches_selected_lp() {
        let api = fake_api();
        let mut dash = Dashboard::new(api.clone(), fixed(date("2024-01-01")));
        tick_until(&mut dash, |d| !d.selector.lps().is_empty());
        dash.handle_key(KeyCode::Down);
        dash.handle_key(KeyCode::Enter);
        dash.handle_key(KeyCode::Tab);
        dash.handle_key(KeyCode::Left);
        settle(&mut dash);
        // Both fetches run concurrently, so their arrival order is not fixed
        let mut requested = api.requested.lock().unwrap().clone();
        requested.sort();
        assert_eq!(
            requested,
            vec![
                "/api/lp/LP2?report_date=2023-12-31".to_string(),
                "/api/lp/LP2?report_date=2024-01-01".to_string(),
            ]
        );
    }

    #[test]
    fn test_date_cannot_move_past_today() {
        let api = fake_api();
        let mut dash = Dashboard::new(api.clone(), fixed(date("2024-01-01")));
        tick_until(&mut dash, |d| !d.selector.lps().is_empty());
        dash.handle_key(KeyCode::Down);
        dash.handle_key(KeyCode::Enter);
        dash.handle_key(KeyCode::Tab);
        dash.handle_key(KeyCode::Right);
        dash.handle_key(KeyCode::Up);
        settle(&mut dash);
        assert_eq!(dash.selector.report_date(), fixed(date("2024-01-01"))());
        // Clamped input leaves the value unchanged, so only the initial fetch went out
        assert_eq!(api.requested.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_failed_fetch_keeps_previous_report() {
        let api = fake_api();
        let mut dash = Dashboard::new(api.clone(), fixed(date("2024-01-01")));
        tick_until(&mut dash, |d| !d.selector.lps().is_empty());

        dash.handle_key(KeyCode::Down);
        dash.handle_key(KeyCode::Enter);
        tick_until(&mut dash, |d| d.selector.report().is_some());
        let before = dash.selector.report().cloned();

        // LP1 has no report in the fake, so its fetch fails
        dash.handle_key(KeyCode::Up);
        dash.handle_key(KeyCode::Enter);
        settle(&mut dash);

        assert_eq!(api.requested.lock().unwrap().len(), 2);
        assert_eq!(dash.selector.selected_lp(), Some("LP1"));
        assert_eq!(dash.selector.report().cloned(), before);
    }

    #[test]
    fn test_listing_failure_leaves_picker_empty() {
        let api = Arc::new(FakeApi::default());
        let mut dash = Dashboard::new(api.clone(), fixed(date("2024-01-01")));
        settle(&mut dash);
        dash.handle_key(KeyCode::Down);
        dash.handle_key(KeyCode::Enter);
        settle(&mut dash);
        assert!(dash.selector.lps().is_empty());
        assert!(api.requested.lock().unwrap().is_empty());
        assert!(screen(&mut dash).contains("(no LPs)"));
    }

    #[test]
    fn test_quit_keys() {
        let mut dash = Dashboard::new(fake_api(), fixed(date("2024-01-01")));
        assert!(matches!(dash.handle_key(KeyCode::Char('q')), AppAction::Quit));
        assert!(matches!(dash.handle_key(KeyCode::Esc), AppAction::Quit));
        assert!(matches!(dash.handle_key(KeyCode::Char('x')), AppAction::Continue));
    }

    #[test]
    fn test_clock_advance_makes_new_day_selectable() {
        let api = fake_api();
        let now = Arc::new(Mutex::new(date("2024-01-01")));
        let clock = {
            let now = Arc::clone(&now);
            move || *now.lock().unwrap()
        };
        let mut dash = Dashboard::new(api.clone(), clock);
        tick_until(&mut dash, |d| !d.selector.lps().is_empty());
        dash.handle_key(KeyCode::Down);
        dash.handle_key(KeyCode::Enter);
        dash.handle_key(KeyCode::Tab);
        dash.handle_key(KeyCode::Right);
        assert_eq!(dash.selector.report_date(), date("2024-01-01"));

        *now.lock().unwrap() = date("2024-01-02");
        dash.tick();
        assert_eq!(dash.selector.today(), date("2024-01-02"));
        // The new bound alone does not move the selected date
        assert_eq!(dash.selector.report_date(), date("2024-01-01"));

        dash.handle_key(KeyCode::Right);
        settle(&mut dash);
        assert_eq!(dash.selector.report_date(), date("2024-01-02"));
        let mut requested = api.requested.lock().unwrap().clone();
        requested.sort();
        assert_eq!(
            requested,
            vec![
                "/api/lp/LP2?report_date=2024-01-01".to_string(),
                "/api/lp/LP2?report_date=2024-01-02".to_string(),
            ]
        );
        assert!(screen(&mut dash).contains("latest 2024-01-02"));
    }

    fn type_keys(dash: &mut Dashboard, text: &str) {
        for c in text.chars() {
            dash.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typed_date_applies_on_enter() {
        let api = fake_api();
        let mut dash = Dashboard::new(api.clone(), fixed(date("2024-01-01")));
        tick_until(&mut dash, |d| !d.selector.lps().is_empty());
        dash.handle_key(KeyCode::Down);
        dash.handle_key(KeyCode::Enter);
        dash.handle_key(KeyCode::Tab);

        type_keys(&mut dash, "2020-05-17");
        assert!(screen(&mut dash).contains("2020-05-17_"));
        assert_eq!(dash.selector.report_date(), date("2024-01-01"));

        dash.handle_key(KeyCode::Enter);
        settle(&mut dash);
        assert!(dash.date_input.is_none());
        assert_eq!(dash.selector.report_date(), date("2020-05-17"));
        let mut requested = api.requested.lock().unwrap().clone();
        requested.sort();
        assert_eq!(
            requested,
            vec![
                "/api/lp/LP2?report_date=2020-05-17".to_string(),
                "/api/lp/LP2?report_date=2024-01-01".to_string(),
            ]
        );
    }

    #[test]
    fn test_typed_future_date_lands_on_today() {
        let api = fake_api();
        let mut dash = Dashboard::new(api.clone(), fixed(date("2024-01-01")));
        tick_until(&mut dash, |d| !d.selector.lps().is_empty());
        dash.handle_key(KeyCode::Down);
        dash.handle_key(KeyCode::Enter);
        dash.handle_key(KeyCode::Tab);
        dash.handle_key(KeyCode::Left);

        dash.handle_key(KeyCode::Char('e'));
        type_keys(&mut dash, "2030-01-01");
        dash.handle_key(KeyCode::Enter);
        settle(&mut dash);
        assert_eq!(dash.selector.report_date(), date("2024-01-01"));
        assert_eq!(api.requested.lock().unwrap().len(), 3);
    }

    #[test]
    fn test_invalid_typed_date_stays_open() {
        let api = fake_api();
        let mut dash = Dashboard::new(api.clone(), fixed(date("2024-01-01")));
        tick_until(&mut dash, |d| !d.selector.lps().is_empty());
        dash.handle_key(KeyCode::Tab);
        type_keys(&mut dash, "2023-13-01");
        dash.handle_key(KeyCode::Enter);
        assert_eq!(dash.date_input.as_deref(), Some("2023-13-01"));
        assert_eq!(dash.selector.report_date(), date("2024-01-01"));

        // Fix the month and submit again
        for _ in 0..5 {
            dash.handle_key(KeyCode::Backspace);
        }
        type_keys(&mut dash, "11-01");
        dash.handle_key(KeyCode::Enter);
        assert!(dash.date_input.is_none());
        assert_eq!(dash.selector.report_date(), date("2023-11-01"));
    }

    #[test]
    fn test_typed_entry_swallows_quit_keys() {
        let mut dash = Dashboard::new(fake_api(), fixed(date("2024-01-01")));
        dash.handle_key(KeyCode::Tab);
        dash.handle_key(KeyCode::Char('e'));
        assert!(matches!(dash.handle_key(KeyCode::Char('q')), AppAction::Continue));
        assert_eq!(dash.date_input.as_deref(), Some(""));
        assert!(matches!(dash.handle_key(KeyCode::Esc), AppAction::Continue));
        assert!(dash.date_input.is_none());
        assert_eq!(dash.selector.report_date(), date("2024-01-01"));
        assert!(matches!(dash.handle_key(KeyCode::Char('q')), AppAction::Quit));
    }
}
