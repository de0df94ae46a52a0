//! Desktop window for `pibench`.
//!
//! Owns the Iced application loop:
//! - a fixed-interval timer that samples the system and updates the charts
//!   as one unit of work per tick
//! - three buttons that start benchmark jobs on background threads; each
//!   job's single result comes back into `update()` as a message

pub mod chart;

use chart::{Scale, Series, SeriesChart};
use iced::{
    widget::{button, canvas, column, container, row, scrollable, text},
    Alignment, Element, Length, Size, Subscription, Task,
};
use pibench_config::{load_or_default, BenchConfig};
use pibench_core::{Dashboard, Message};
use pibench_system::MetricSampler;
use pibench_theme::Theme;
use std::time::Duration;
use tracing::{debug, info};

/// Shortest tick the timer accepts.
const MIN_INTERVAL_MS: u64 = 100;

// ── Entry point ───────────────────────────────────────────────────────────────

/// Open the window and run until it is closed.
pub fn run() -> iced::Result {
    let config = load_or_default();

    iced::application(Monitor::new, Monitor::update, Monitor::view)
        .title(Monitor::title)
        .subscription(Monitor::subscription)
        .style(Monitor::style)
        .window_size(Size::new(config.window.width, config.window.height))
        .run()
}

// ── State ─────────────────────────────────────────────────────────────────────

struct Monitor {
    config:    BenchConfig,
    theme:     Theme,
    sampler:   MetricSampler,
    dashboard: Dashboard,
}

impl Monitor {
    fn new() -> (Self, Task<Message>) {
        let config = load_or_default();
        let theme = Theme::from_config(&config.theme);

        info!(
            interval_ms = config.sampler.interval_ms,
            history = config.sampler.history,
            network = ?config.sampler.network,
            "Sampling configured"
        );

        let monitor = Self {
            sampler:   MetricSampler::from_config(&config),
            dashboard: Dashboard::new(config.sampler.history),
            theme,
            config,
        };

        (monitor, Task::none())
    }

    fn title(&self) -> String {
        self.config.window.title.clone()
    }

    // ── Update ────────────────────────────────────────────────────────────────

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                let sample = self.sampler.sample();
                debug!(
                    cpu = sample.cpu_percent,
                    ram = sample.ram_percent,
                    temp = sample.temp_celsius,
                    net_in = sample.net_in_mb,
                    net_out = sample.net_out_mb,
                    "Tick"
                );
                self.dashboard.on_tick(&sample);
                Task::none()
            }
            Message::RunStressTest => Task::perform(
                pibench_bench::run_stress(self.config.stress.clone()),
                Message::BenchmarkFinished,
            ),
            Message::RunSpeedTest => {
                self.dashboard.on_speed_test_started();
                Task::perform(
                    pibench_bench::run_speed_test(self.config.speedtest.clone()),
                    Message::BenchmarkFinished,
                )
            }
            Message::RunVideoTest => Task::perform(
                pibench_bench::run_video(self.config.video.clone()),
                Message::BenchmarkFinished,
            ),
            Message::BenchmarkFinished(result) => {
                debug!(?result, "Benchmark finished");
                self.dashboard.on_benchmark_result(&result);
                Task::none()
            }
        }
    }

    // ── View ──────────────────────────────────────────────────────────────────

    fn view(&self) -> Element<'_, Message> {
        let size = self.theme.font_size;
        let gap = self.theme.spacing as f32;
        let dash = &self.dashboard;

        let labels = column![
            text(dash.cpu_label.as_str()).size(size),
            text(dash.ram_label.as_str()).size(size),
            text(dash.temp_label.as_str()).size(size),
        ]
        .spacing(gap / 2.0);

        let cpu_chart = self.chart(
            self.chart_title(format!("CPU Usage (%)   avg {:.1}", dash.cpu.average())),
            vec![Series {
                window: &dash.cpu,
                color:  self.theme.cpu_line.to_iced(),
            }],
            Scale::Fixed(100.0),
        );
        let ram_chart = self.chart(
            self.chart_title(format!("RAM Usage (%)   avg {:.1}", dash.ram.average())),
            vec![Series {
                window: &dash.ram,
                color:  self.theme.ram_line.to_iced(),
            }],
            Scale::Fixed(100.0),
        );

        let net_title = row![
            self.chart_title("Network I/O (MB)".to_string()),
            text("— in").size(size * 0.85).color(self.theme.net_in_line.to_iced()),
            text("— out").size(size * 0.85).color(self.theme.net_out_line.to_iced()),
        ]
        .spacing(gap)
        .align_y(Alignment::Center);
        let net_chart = self.chart(
            net_title,
            vec![
                Series {
                    window: &dash.net_in,
                    color:  self.theme.net_in_line.to_iced(),
                },
                Series {
                    window: &dash.net_out,
                    color:  self.theme.net_out_line.to_iced(),
                },
            ],
            Scale::Auto,
        );

        let buttons = row![
            button(text("Run Stress Test").size(size)).on_press(Message::RunStressTest),
            button(text("Run Internet Speed Test").size(size)).on_press(Message::RunSpeedTest),
            button(text("Run Video Render Test").size(size)).on_press(Message::RunVideoTest),
        ]
        .spacing(gap);

        let status = match dash.last_tick {
            Some(t) => format!("Last sample: {}", t.format("%H:%M:%S")),
            None => "Waiting for first sample…".to_string(),
        };

        let content = column![
            labels,
            cpu_chart,
            ram_chart,
            net_chart,
            buttons,
            text(dash.speed_label.as_str()).size(size),
            text(dash.video_label.as_str()).size(size),
            text(status).size(size * 0.8),
        ]
        .spacing(gap)
        .width(Length::Fill);

        container(scrollable(content))
            .padding(self.theme.padding)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn chart_title(&self, title: String) -> Element<'_, Message> {
        text(title)
            .size(self.theme.font_size)
            .color(self.theme.accent.to_iced())
            .into()
    }

    fn chart<'a>(
        &'a self,
        title: impl Into<Element<'a, Message>>,
        series: Vec<Series<'a>>,
        scale: Scale,
    ) -> Element<'a, Message> {
        let plot = canvas(SeriesChart {
            series,
            scale,
            background: self.theme.chart_background.to_iced(),
            grid: self.theme.foreground.with_alpha(0.25).to_iced(),
        })
        .width(Length::Fill)
        .height(Length::Fixed(self.theme.chart_height));

        let title: Element<'a, Message> = title.into();
        column![title, plot]
            .spacing(self.theme.spacing as f32 / 2.0)
            .into()
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    fn subscription(&self) -> Subscription<Message> {
        let interval = self.config.sampler.interval_ms.max(MIN_INTERVAL_MS);
        iced::time::every(Duration::from_millis(interval)).map(|_| Message::Tick)
    }

    // ── Style ─────────────────────────────────────────────────────────────────

    fn style(&self, _theme: &iced::Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: self.theme.background.to_iced(),
            text_color: self.theme.foreground.to_iced(),
        }
    }
}
