use iced::widget::{button, checkbox, column, container, pick_list, progress_bar, row, scrollable, slider, text, text_input, Column};
use iced::widget::button as button_widget;
use iced::widget::container as container_widget;
use iced::{Alignment, Background, Color, Command, Element, Length, Theme};
use iced::theme;
use chrono::{Local, NaiveDateTime};
use log::{error, info};
use std::time::{Duration, Instant};

use ramadan_timetable::alarm::AdhanScheduler;
use ramadan_timetable::audio::{prefetch, Acquisition, AdhanPlayer, ClipSources, CpalBackend};
use ramadan_timetable::calendar::{calendar, today_index, DayCursor};
use ramadan_timetable::countdown::DayView;
use ramadan_timetable::i18n::{
    ashra_label, format_clock, greeting_cards, localize_digits, localized_date, ordinal_day, strings, weekday_name,
    Language,
};
use ramadan_timetable::settings::{Settings, SettingsStore};
use ramadan_timetable::share::{
    day_request, find_card, greeting_request, share, ClipboardOnly, MosqueProfile, ShareOutcome, ShareRequest,
    COPIED_INDICATOR,
};
use ramadan_timetable::storage::{data_dir, LocalStorage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Today,
    Calendar,
    Greetings,
    Donate,
}

fn color_bg() -> Color {
    Color::from_rgb8(2, 6, 23)
}

fn color_surface() -> Color {
    Color::from_rgb8(15, 23, 42)
}

fn color_surface_alt() -> Color {
    Color::from_rgb8(30, 41, 59)
}

fn color_border() -> Color {
    Color::from_rgb8(51, 65, 85)
}

fn color_text() -> Color {
    Color::from_rgb8(241, 245, 249)
}

fn color_muted() -> Color {
    Color::from_rgb8(148, 163, 184)
}

fn color_accent() -> Color {
    Color::from_rgb8(245, 158, 11)
}

fn color_live() -> Color {
    Color::from_rgb8(16, 185, 129)
}

fn color_danger() -> Color {
    Color::from_rgb8(239, 68, 68)
}

#[derive(Debug, Clone)]
pub enum Message {
    Tick,
    Prefetched(Acquisition),
    PrevDay,
    NextDay,
    JumpToday,
    SelectDay(usize),
    PanelSelected(Panel),
    ToggleSettings,
    LanguageSelected(Language),
    IftarAlarmChanged(bool),
    SuhoorAlarmChanged(bool),
    VolumeChanged(f32),
    PreviewAdhan,
    StopAdhan,
    ShareDay,
    ShareCard(String),
    CustomMessageChanged(String),
    ResetCustomMessage,
    CopyText(String),
}

pub struct App {
    settings: Settings,
    store: SettingsStore,
    cursor: DayCursor,
    now: NaiveDateTime,
    adhan: AdhanScheduler<CpalBackend>,
    http: reqwest::Client,
    profile: MosqueProfile,
    panel: Panel,
    settings_open: bool,
    custom_message: String,
    copied_until: Option<Instant>,
}

impl App {
    fn new_with_store(store: SettingsStore) -> Self {
        let settings = store.load();
        let now = Local::now().naive_local();
        let days = calendar();
        let mut cursor = DayCursor::new(days.len());
        cursor.select(today_index(days, now.date()));
        App {
            settings,
            store,
            cursor,
            now,
            adhan: AdhanScheduler::new(AdhanPlayer::new(CpalBackend::new(), ClipSources::default())),
            http: reqwest::Client::new(),
            profile: MosqueProfile::load(&data_dir()),
            panel: Panel::Today,
            settings_open: false,
            custom_message: String::new(),
            copied_until: None,
        }
    }
}

impl iced::Application for App {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = ();

    fn new(_flags: ()) -> (Self, Command<Self::Message>) {
        let app = Self::new_with_store(SettingsStore::new(LocalStorage::open_default()));
        info!("settings loaded from {}", app.store.storage().path().display());
        let client = app.http.clone();
        let command = Command::perform(prefetch(client, ClipSources::default()), Message::Prefetched);
        (app, command)
    }

    fn title(&self) -> String {
        strings(self.settings.language).title.clone()
    }

    fn subscription(&self) -> iced::Subscription<Self::Message> {
        iced::time::every(Duration::from_secs(1)).map(|_| Message::Tick)
    }

    fn update(&mut self, message: Self::Message) -> Command<Self::Message> {
        match message {
            Message::Tick => {
                self.now = Local::now().naive_local();
                let day = calendar().get(self.cursor.index());
                self.adhan.tick(self.now, day, &self.settings);
                if self.copied_until.is_some_and(|until| Instant::now() >= until) {
                    self.copied_until = None;
                }
                Command::none()
            }
            Message::Prefetched(acquisition) => {
                self.adhan.player_mut().install(acquisition);
                Command::none()
            }
            Message::PrevDay => {
                self.cursor.prev();
                Command::none()
            }
            Message::NextDay => {
                self.cursor.next();
                Command::none()
            }
            Message::JumpToday => {
                self.cursor.jump_to(calendar(), self.now.date());
                Command::none()
            }
            Message::SelectDay(index) => {
                self.cursor.select(index);
                self.panel = Panel::Today;
                Command::none()
            }
            Message::PanelSelected(panel) => {
                self.panel = panel;
                Command::none()
            }
            Message::ToggleSettings => {
                self.settings_open = !self.settings_open;
                Command::none()
            }
            Message::LanguageSelected(lang) => {
                self.settings.language = lang;
                self.persist();
                Command::none()
            }
            Message::IftarAlarmChanged(v) => {
                self.settings.iftar_alarm_enabled = v;
                self.persist();
                Command::none()
            }
            Message::SuhoorAlarmChanged(v) => {
                self.settings.suhoor_alarm_enabled = v;
                self.persist();
                Command::none()
            }
            Message::VolumeChanged(v) => {
                self.settings = self.settings.clone().with_volume(v);
                self.persist();
                Command::none()
            }
            Message::PreviewAdhan => {
                self.adhan.player_mut().play(true, self.settings.voice_volume);
                Command::none()
            }
            Message::StopAdhan => {
                self.adhan.player_mut().stop();
                Command::none()
            }
            Message::ShareDay => {
                let day = &calendar()[self.cursor.index()];
                let request = day_request(self.settings.language, day, &self.profile.share_url);
                self.share(&request)
            }
            Message::ShareCard(id) => {
                let Some(card) = find_card(&id) else {
                    return Command::none();
                };
                let custom = Some(self.custom_message.as_str());
                let request = greeting_request(self.settings.language, card, custom, &self.profile.share_url);
                self.share(&request)
            }
            Message::CustomMessageChanged(v) => {
                self.custom_message = v;
                Command::none()
            }
            Message::ResetCustomMessage => {
                self.custom_message.clear();
                Command::none()
            }
            Message::CopyText(value) => {
                self.copied_until = Some(Instant::now() + COPIED_INDICATOR);
                iced::clipboard::write(value)
            }
        }
    }

    fn view(&self) -> Element<'_, Self::Message> {
        let lang = self.settings.language;
        let t = strings(lang);
        let days = calendar();
        let view = DayView::compute(days, self.cursor.index(), self.now);

        let tab_button = |label: &str, panel: Panel| {
            let selected = self.panel == panel;
            button(text(label).size(14))
                .padding([8, 14])
                .style(tone(Tone::Tab(selected)))
                .on_press(Message::PanelSelected(panel))
        };

        let mut tabs = row![
            tab_button(&t.today, Panel::Today),
            tab_button(&t.full_calendar, Panel::Calendar),
            tab_button(&t.greetings, Panel::Greetings),
        ]
        .spacing(10)
        .align_items(Alignment::Center);
        if self.profile.donation.is_some() {
            tabs = tabs.push(tab_button(&t.donate, Panel::Donate));
        }
        tabs = tabs.push(
            button(text(&t.alarms_btn).size(14))
                .padding([8, 14])
                .style(tone(Tone::Ghost))
                .on_press(Message::ToggleSettings),
        );

        let clock = format_clock(lang, self.now.time(), true);
        let hero = container(
            row![
                column![
                    text(&t.title).size(24).style(color_text()),
                    text(&t.sub_title).style(color_muted()),
                ]
                .spacing(6)
                .width(Length::FillPortion(3)),
                column![
                    text(&t.current_time_label).size(12).style(color_muted()),
                    row![
                        text(&clock.time).size(28).style(color_accent()),
                        text(clock.period).style(color_muted()),
                    ]
                    .spacing(8)
                    .align_items(Alignment::Center),
                    pick_list(Language::ALL.to_vec(), Some(lang), Message::LanguageSelected),
                ]
                .spacing(6)
                .align_items(Alignment::End)
                .width(Length::FillPortion(2)),
            ]
            .spacing(24)
            .align_items(Alignment::Center),
        )
        .padding(16)
        .width(Length::Fill)
        .style(theme::Container::from(hero_style));

        let body: Element<'_, Message> = match self.panel {
            Panel::Today => self.today_panel(&view),
            Panel::Calendar => self.calendar_panel(),
            Panel::Greetings => self.greetings_panel(),
            Panel::Donate => self.donate_panel(),
        };

        let mut content = column![hero, tabs].spacing(18);
        if self.settings_open {
            content = content.push(self.settings_card());
        }
        let content = content
            .push(body)
            .push(text(&t.hadith).size(13).style(color_muted()))
            .padding(24)
            .width(Length::Fill)
            .align_items(Alignment::Start);

        let scroll = scrollable(content)
            .width(Length::Fill)
            .height(Length::Fill);

        container(scroll)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x()
            .style(theme::Container::from(body_style))
            .into()
    }
}

impl App {
    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.settings) {
            error!("failed to save settings: {:#}", e);
        }
    }

    fn share(&mut self, request: &ShareRequest) -> Command<Message> {
        match share(&mut ClipboardOnly, request) {
            ShareOutcome::Copy(payload) => {
                self.copied_until = Some(Instant::now() + COPIED_INDICATOR);
                iced::clipboard::write(payload)
            }
            ShareOutcome::Shared | ShareOutcome::Failed => Command::none(),
        }
    }

    fn is_copied(&self) -> bool {
        self.copied_until.is_some()
    }

    fn today_panel(&self, view: &DayView<'_>) -> Element<'_, Message> {
        let lang = self.settings.language;
        let t = strings(lang);
        let day = view.day;

        let mut badges = row![pill(ashra_label(lang, view.ashra), color_surface_alt(), color_accent())]
            .spacing(8)
            .align_items(Alignment::Center);
        if view.is_today {
            badges = badges.push(pill(&t.ongoing, color_live(), Color::from_rgb8(6, 24, 19)));
        }

        let share_label = if self.is_copied() { &t.copied } else { &t.share };
        let day_card = card(
            &ordinal_day(lang, day.day_number),
            highlight_card_style,
            column![
                row![
                    text(localized_date(lang, day.date)).size(18),
                    text(weekday_name(lang, day.weekday)).style(color_muted()),
                ]
                .spacing(10)
                .align_items(Alignment::Center),
                badges,
                row![
                    text(localize_digits(lang, &view.days_remaining.to_string())).size(28).style(color_accent()),
                    text(t.days_remaining.replace('\n', " ")).style(color_muted()),
                ]
                .spacing(10)
                .align_items(Alignment::Center),
                row![
                    nav_button("<", (!self.cursor.is_first()).then_some(Message::PrevDay)),
                    nav_button(&t.today, Some(Message::JumpToday)),
                    nav_button(">", (!self.cursor.is_last()).then_some(Message::NextDay)),
                    button(text(share_label))
                        .padding([6, 14])
                        .style(tone(Tone::Primary))
                        .on_press(Message::ShareDay),
                ]
                .spacing(10)
                .align_items(Alignment::Center),
            ],
        );

        let suhoor_clock = format_clock(lang, view.suhoor_day.suhoor, false);
        let suhoor_status = match view.suhoor_countdown {
            Some(c) => format!("{} {}", t.suhoor_remaining, localize_digits(lang, &c.to_string())),
            None => t.suhoor_ended.clone(),
        };
        let suhoor_card = card(
            &t.suhoor,
            card_style,
            column![
                row![
                    text(&suhoor_clock.time).size(32).style(color_accent()),
                    text(suhoor_clock.period).style(color_muted()),
                ]
                .spacing(8)
                .align_items(Alignment::Center),
                text(suhoor_status).style(color_muted()),
            ],
        );

        let iftar_clock = format_clock(lang, day.iftar, false);
        let iftar_status = match view.iftar_countdown {
            Some(c) => format!("{} {}", t.iftar_remaining, localize_digits(lang, &c.to_string())),
            None => t.iftar_ended.clone(),
        };
        let iftar_card = card(
            &t.iftar,
            card_style,
            column![
                row![
                    text(&iftar_clock.time).size(32).style(color_accent()),
                    text(iftar_clock.period).style(color_muted()),
                ]
                .spacing(8)
                .align_items(Alignment::Center),
                text(iftar_status).style(color_muted()),
                progress_bar(0.0..=1.0, fast_progress(view, self.now)).height(6),
            ],
        );

        column![
            day_card,
            row![suhoor_card, iftar_card].spacing(16).align_items(Alignment::Start),
        ]
        .spacing(16)
        .into()
    }

    fn calendar_panel(&self) -> Element<'_, Message> {
        let lang = self.settings.language;
        let t = strings(lang);

        let header = row![
            text(&t.ramadan_day).width(Length::FillPortion(2)).style(color_muted()),
            text(&t.date).width(Length::FillPortion(3)).style(color_muted()),
            text(&t.suhoor).width(Length::FillPortion(2)).style(color_muted()),
            text(&t.iftar).width(Length::FillPortion(2)).style(color_muted()),
        ]
        .spacing(10);

        let rows = calendar().iter().enumerate().fold(Column::new().spacing(6), |col, (idx, day)| {
            let is_today = day.date == self.now.date();
            let selected = idx == self.cursor.index();
            let line = row![
                text(localize_digits(lang, &day.day_number.to_string())).width(Length::FillPortion(2)),
                text(format!("{} · {}", localized_date(lang, day.date), weekday_name(lang, day.weekday)))
                    .width(Length::FillPortion(3)),
                text(format_clock(lang, day.suhoor, false).time).width(Length::FillPortion(2)),
                text(format_clock(lang, day.iftar, false).time).width(Length::FillPortion(2)),
            ]
            .spacing(10);
            col.push(
                button(line)
                    .width(Length::Fill)
                    .padding([6, 10])
                    .style(tone(Tone::Tab(selected || is_today)))
                    .on_press(Message::SelectDay(idx)),
            )
        });

        card(&t.full_calendar, card_style, column![header, rows]).into()
    }

    fn greetings_panel(&self) -> Element<'_, Message> {
        let lang = self.settings.language;
        let t = strings(lang);

        let editor = row![
            text_input(&t.write_message, &self.custom_message).on_input(Message::CustomMessageChanged),
            button(text(&t.reset))
                .style(tone(Tone::Ghost))
                .on_press(Message::ResetCustomMessage),
        ]
        .spacing(10)
        .align_items(Alignment::Center);

        let cards = greeting_cards().iter().fold(Column::new().spacing(12), |col, greeting| {
            let preview = if self.custom_message.trim().is_empty() {
                greeting.message(lang).to_string()
            } else {
                self.custom_message.clone()
            };
            let tint = greeting
                .accent_rgb()
                .map(|(r, g, b)| Color::from_rgb8(r, g, b))
                .unwrap_or_else(color_accent);
            col.push(
                container(
                    row![
                        column![text(&t.preview).size(12).style(tint), text(preview)]
                            .spacing(4)
                            .width(Length::Fill),
                        button(text(&t.send))
                            .style(tone(Tone::Primary))
                            .on_press(Message::ShareCard(greeting.id.clone())),
                    ]
                    .spacing(12)
                    .align_items(Alignment::Center),
                )
                .padding(12)
                .width(Length::Fill)
                .style(theme::Container::Custom(Box::new(TintStyle {
                    bg: color_surface_alt(),
                    fg: color_text(),
                    border: tint,
                    radius: 10.0,
                }))),
            )
        });

        let mut body = column![text(&t.customize).style(color_muted()), editor, cards].spacing(12);
        if self.is_copied() {
            body = body.push(text(&t.copied).style(color_live()));
        }
        card(&t.greetings, card_style, body).into()
    }

    fn donate_panel(&self) -> Element<'_, Message> {
        let lang = self.settings.language;
        let t = strings(lang);
        let Some(details) = self.profile.donation.as_ref() else {
            return column![].into();
        };

        let fields = details.fields(lang).into_iter().fold(Column::new().spacing(10), |col, (label, value)| {
            col.push(
                row![
                    text(label).width(Length::FillPortion(1)).style(color_muted()),
                    text(value).width(Length::FillPortion(3)),
                    button(text(&t.copy))
                        .style(tone(Tone::Ghost))
                        .on_press(Message::CopyText(value.to_string())),
                ]
                .spacing(10)
                .align_items(Alignment::Center),
            )
        });

        let mut body = column![fields].spacing(12);
        if self.is_copied() {
            body = body.push(text(&t.copied).style(color_live()));
        }
        card(&t.donate_title, card_style, body).into()
    }

    fn settings_card(&self) -> Element<'_, Message> {
        let t = strings(self.settings.language);
        let volume_pct = (self.settings.voice_volume * 100.0).round() as u32;

        let preview_button = if self.adhan.player().is_previewing() {
            button(text(&t.listen_adhan))
                .padding(10)
                .style(tone(Tone::Danger))
                .on_press(Message::StopAdhan)
        } else {
            button(text(&t.listen_adhan))
                .padding(10)
                .style(tone(Tone::Primary))
                .on_press(Message::PreviewAdhan)
        };

        card(
            &t.alarms_btn,
            card_style,
            column![
                checkbox(t.iftar_alarm.as_str(), self.settings.iftar_alarm_enabled, Message::IftarAlarmChanged),
                checkbox(t.suhoor_alarm.as_str(), self.settings.suhoor_alarm_enabled, Message::SuhoorAlarmChanged),
                row![
                    text(format!("{} {}%", t.volume, volume_pct)),
                    slider(0.0..=1.0, self.settings.voice_volume, Message::VolumeChanged).step(0.1),
                ]
                .spacing(10)
                .align_items(Alignment::Center),
                row![
                    preview_button,
                    button(text(&t.close))
                        .padding(10)
                        .style(tone(Tone::Ghost))
                        .on_press(Message::ToggleSettings),
                ]
                .spacing(10),
            ],
        )
    }
}

fn nav_button<'a>(label: &str, on_press: Option<Message>) -> iced::widget::Button<'a, Message> {
    let b = button(text(label))
        .padding([6, 14])
        .style(tone(Tone::Ghost));
    match on_press {
        Some(message) => b.on_press(message),
        None => b,
    }
}

/// Share of today's fast already completed, suhoor to iftar.
fn fast_progress(view: &DayView<'_>, now: NaiveDateTime) -> f32 {
    if !view.is_today {
        return 0.0;
    }
    let start = view.day.date.and_time(view.day.suhoor);
    let end = view.day.date.and_time(view.day.iftar);
    let total = (end - start).num_seconds();
    if total <= 0 {
        return 0.0;
    }
    let elapsed = (now - start).num_seconds();
    (elapsed as f32 / total as f32).clamp(0.0, 1.0)
}

fn card<'a>(
    title: &str,
    style: fn(&Theme) -> container_widget::Appearance,
    content: Column<'a, Message>,
) -> Element<'a, Message> {
    container(
        column![
            container(text(title).size(15).style(color_text()))
                .padding([6, 10])
                .width(Length::Fill)
                .style(theme::Container::from(header_style)),
            content.spacing(12),
        ]
        .spacing(12),
    )
    .padding(14)
    .width(Length::Fill)
    .style(theme::Container::from(style))
    .into()
}

fn header_style(_theme: &Theme) -> container_widget::Appearance {
    container_widget::Appearance {
        background: Some(Background::Color(color_surface_alt())),
        text_color: Some(color_text()),
        border_radius: 10.0.into(),
        border_width: 1.0,
        border_color: color_border(),
    }
}

fn card_style(_theme: &Theme) -> container_widget::Appearance {
    container_widget::Appearance {
        background: Some(Background::Color(color_surface())),
        text_color: Some(color_text()),
        border_radius: 14.0.into(),
        border_width: 1.0,
        border_color: color_border(),
    }
}

fn highlight_card_style(theme: &Theme) -> container_widget::Appearance {
    container_widget::Appearance {
        border_width: 2.0,
        border_color: color_accent(),
        ..card_style(theme)
    }
}

fn hero_style(theme: &Theme) -> container_widget::Appearance {
    container_widget::Appearance {
        border_radius: 16.0.into(),
        border_color: color_accent(),
        ..card_style(theme)
    }
}

fn body_style(_theme: &Theme) -> container_widget::Appearance {
    container_widget::Appearance {
        background: Some(Background::Color(color_bg())),
        text_color: Some(color_text()),
        ..Default::default()
    }
}

fn pill<'a>(label: &str, bg: Color, fg: Color) -> Element<'a, Message> {
    container(text(label).size(12))
        .padding([4, 10])
        .style(theme::Container::Custom(Box::new(TintStyle {
            bg,
            fg,
            border: bg,
            radius: 999.0,
        })))
        .into()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Primary,
    Ghost,
    Danger,
    /// Panel tab; `true` when selected.
    Tab(bool),
}

fn tone(tone: Tone) -> theme::Button {
    theme::Button::Custom(Box::new(ToneButton(tone)))
}

struct ToneButton(Tone);

impl ToneButton {
    fn shade(&self, hovered: bool) -> Option<Color> {
        let (r, g, b) = match (self.0, hovered) {
            (Tone::Tab(true), _) => return None,
            (Tone::Primary, true) => (251, 191, 36),
            (Tone::Primary, false) => (217, 119, 6),
            (Tone::Danger, true) => (248, 113, 113),
            (Tone::Danger, false) => (220, 38, 38),
            (Tone::Ghost | Tone::Tab(false), true) => (51, 65, 85),
            (Tone::Ghost | Tone::Tab(false), false) => (40, 52, 70),
        };
        Some(Color::from_rgb8(r, g, b))
    }
}

impl button_widget::StyleSheet for ToneButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button_widget::Appearance {
        let (bg, text_color, border_color) = match self.0 {
            Tone::Primary | Tone::Tab(true) => (color_accent(), Color::from_rgb8(28, 16, 2), color_accent()),
            Tone::Ghost | Tone::Tab(false) => (color_surface_alt(), color_text(), color_border()),
            Tone::Danger => (color_danger(), Color::WHITE, color_danger()),
        };
        button_widget::Appearance {
            background: Some(Background::Color(bg)),
            text_color,
            border_radius: 10.0.into(),
            border_width: 1.0,
            border_color,
            ..Default::default()
        }
    }

    fn hovered(&self, style: &Self::Style) -> button_widget::Appearance {
        let mut active = self.active(style);
        if let Some(shade) = self.shade(true) {
            active.background = Some(Background::Color(shade));
        }
        active
    }

    fn pressed(&self, style: &Self::Style) -> button_widget::Appearance {
        let mut active = self.active(style);
        if let Some(shade) = self.shade(false) {
            active.background = Some(Background::Color(shade));
        }
        active
    }
}

struct TintStyle {
    bg: Color,
    fg: Color,
    border: Color,
    radius: f32,
}

impl container_widget::StyleSheet for TintStyle {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container_widget::Appearance {
        container_widget::Appearance {
            background: Some(Background::Color(self.bg)),
            text_color: Some(self.fg),
            border_radius: self.radius.into(),
            border_width: 1.0,
            border_color: self.border,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::button::StyleSheet as _;

    #[test]
    fn highlight_card_only_changes_the_border() {
        let plain = card_style(&Theme::Dark);
        let highlight = highlight_card_style(&Theme::Dark);
        assert_eq!(highlight.background, plain.background);
        assert_eq!(highlight.text_color, plain.text_color);
        assert_eq!(highlight.border_color, color_accent());
        assert_eq!(highlight.border_width, 2.0);
    }

    #[test]
    fn selected_tab_keeps_its_fill_when_hovered() {
        let selected = ToneButton(Tone::Tab(true));
        let active = selected.active(&Theme::Dark);
        assert_eq!(selected.hovered(&Theme::Dark).background, active.background);
        assert_eq!(active.background, ToneButton(Tone::Primary).active(&Theme::Dark).background);

        let idle = ToneButton(Tone::Tab(false));
        assert_eq!(
            idle.pressed(&Theme::Dark).background,
            ToneButton(Tone::Ghost).pressed(&Theme::Dark).background
        );
        assert_ne!(idle.hovered(&Theme::Dark).background, idle.active(&Theme::Dark).background);
    }
}
