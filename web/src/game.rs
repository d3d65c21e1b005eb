use crate::utils::*;
use clap::Args;
use gloo::timers::callback::Interval;
use memoria_core as game;
use game::{Coord, Difficulty, Event, GamePhase, TickSource};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

const TICK_MILLIS: u32 = 1000;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    SelectDifficulty(Difficulty),
    EditCell(Coord, Coord, String),
    Complete,
    GiveUp,
    PlayAgain,
    GoHome,
    Tick,
}

impl From<Msg> for Event {
    fn from(msg: Msg) -> Self {
        match msg {
            Msg::SelectDifficulty(difficulty) => Event::SelectDifficulty(difficulty),
            Msg::EditCell(row, col, value) => Event::EditCell { row, col, value },
            Msg::Complete => Event::Complete,
            Msg::GiveUp => Event::GiveUp,
            Msg::PlayAgain => Event::PlayAgain,
            Msg::GoHome => Event::GoHome,
            Msg::Tick => Event::Tick,
        }
    }
}

/// Tick source backed by a gloo interval; dropping the interval cancels it.
struct IntervalClock {
    link: Scope<GameView>,
    interval: Option<Interval>,
}

impl IntervalClock {
    fn new(link: Scope<GameView>) -> Self {
        Self {
            link,
            interval: None,
        }
    }
}

impl TickSource for IntervalClock {
    fn start(&mut self) {
        let link = self.link.clone();
        self.interval = Some(Interval::new(TICK_MILLIS, move || {
            link.send_message(Msg::Tick)
        }));
        log::debug!("memorize timer started");
    }

    fn stop(&mut self) {
        if self.interval.take().is_some() {
            log::debug!("memorize timer stopped");
        }
    }

    fn is_running(&self) -> bool {
        self.interval.is_some()
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,
}

pub(crate) struct GameView {
    session: game::GameSession,
    clock: IntervalClock,
}

impl GameView {
    fn view_home(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section class="home">
                <h1>{"Memory training"}</h1>
                <p>{"Memorize the two-digit numbers before time runs out, then type them back in."}</p>
                <nav>
                    {
                        for Difficulty::ALL.into_iter().map(|difficulty| {
                            let size = difficulty.grid_size();
                            let onclick = ctx.link().callback(move |_| Msg::SelectDifficulty(difficulty));
                            html! {
                                <button class={difficulty.name()} {onclick}>
                                    <strong>{difficulty_title(difficulty)}</strong>
                                    <small>{format!("{size}×{size} grid, {}s", difficulty.time_limit())}</small>
                                </button>
                            }
                        })
                    }
                </nav>
            </section>
        }
    }

    fn view_countdown(&self) -> Html {
        let countdown = self.session.countdown();
        let class = classes!("countdown", urgency_class(countdown.urgency()));

        html! {
            <aside {class}>
                <progress value={countdown.time_left().to_string()} max={countdown.total().to_string()}/>
                <span>{format!("{}s", countdown.time_left())}</span>
            </aside>
        }
    }

    fn view_board(&self, ctx: &Context<Self>) -> Html {
        let size = self.session.grid_size();
        let numbers = self.session.visible_numbers();
        let answers = self.session.answers();

        html! {
            <table class="board">
                {
                    for (0..size).map(|row| html! {
                        <tr>
                            {
                                for (0..size).map(|col| match numbers {
                                    Some(numbers) => html! {
                                        <td class="number">{numbers[(row, col)].to_string()}</td>
                                    },
                                    None => {
                                        let oninput = ctx.link().callback(move |e: InputEvent| {
                                            let input: HtmlInputElement = e.target_unchecked_into();
                                            let raw = input.value();
                                            let clean = game::sanitize_answer(&raw);
                                            if clean != raw {
                                                input.set_value(&clean);
                                            }
                                            Msg::EditCell(row, col, clean)
                                        });
                                        html! {
                                            <td>
                                                <input
                                                    type="text"
                                                    inputmode="numeric"
                                                    maxlength="2"
                                                    placeholder="?"
                                                    value={answers.cell_at((row, col)).to_string()}
                                                    {oninput}
                                                />
                                            </td>
                                        }
                                    }
                                })
                            }
                        </tr>
                    })
                }
            </table>
        }
    }

    fn view_game(&self, ctx: &Context<Self>) -> Html {
        let memorizing = self.session.phase() == GamePhase::Memorizing;
        let cb_home = ctx.link().callback(|_| Msg::GoHome);

        html! {
            <section class="game">
                <nav>
                    <button onclick={cb_home}>{"Home"}</button>
                    if memorizing {
                        {self.view_countdown()}
                    }
                </nav>
                if memorizing {
                    <p class="hint">{"Remember every number and where it is, they disappear when time is up."}</p>
                } else {
                    <p class="hint">{"Type each number back where you saw it."}</p>
                }
                {self.view_board(ctx)}
                if !memorizing {
                    <footer>
                        <button class="complete" onclick={ctx.link().callback(|_| Msg::Complete)}>{"Done"}</button>
                        <button class="give-up" onclick={ctx.link().callback(|_| Msg::GiveUp)}>{"Give up"}</button>
                    </footer>
                }
            </section>
        }
    }

    fn view_result(&self, ctx: &Context<Self>) -> Html {
        let report = self.session.report();
        let size = self.session.grid_size();
        let numbers = self.session.numbers();
        let answers = self.session.answers();

        html! {
            <section class="result">
                <nav>
                    <button onclick={ctx.link().callback(|_| Msg::GoHome)}>{"Home"}</button>
                    <button onclick={ctx.link().callback(|_| Msg::PlayAgain)}>{"Play again"}</button>
                </nav>
                <h1>{format!("{}%", self.session.score())}</h1>
                {
                    for self.session.grade().map(|grade| html! {
                        <>
                            <h2 class="grade">{grade.label()}</h2>
                            <p>{grade.message()}</p>
                        </>
                    })
                }
                <dl>
                    <dt>{"Total"}</dt><dd>{report.total.to_string()}</dd>
                    <dt>{"Correct"}</dt><dd>{report.correct.to_string()}</dd>
                    <dt>{"Wrong"}</dt><dd>{report.wrong.to_string()}</dd>
                </dl>
                <div class="compare">
                    <table class="board solution">
                        {
                            for (0..size).map(|row| html! {
                                <tr>{ for (0..size).map(|col| html! { <td>{numbers[(row, col)].to_string()}</td> }) }</tr>
                            })
                        }
                    </table>
                    <table class="board answers">
                        {
                            for (0..size).map(|row| html! {
                                <tr>
                                    {
                                        for (0..size).map(|col| {
                                            let answer = answers.cell_at((row, col));
                                            let class = self
                                                .session
                                                .verdict_at((row, col))
                                                .map(verdict_class);
                                            let text = if answer.is_empty() { "?" } else { answer };
                                            html! { <td {class}>{text.to_string()}</td> }
                                        })
                                    }
                                </tr>
                            })
                        }
                    </table>
                </div>
            </section>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
        Self {
            session: game::GameSession::with_seed(seed),
            clock: IntervalClock::new(ctx.link().clone()),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        if msg != Msg::Tick {
            log::debug!("intent: {:?}", msg);
        }

        let transition = self.session.handle(msg.into());
        transition.timer.apply_to(&mut self.clock);
        transition.has_update()
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match self.session.phase() {
            GamePhase::Home => self.view_home(ctx),
            GamePhase::Memorizing | GamePhase::Answering => self.view_game(ctx),
            GamePhase::Result => self.view_result(ctx),
        }
    }
}
