use super::state::{self, CounterAction, Milestone, MAX_VALUE, PULSE_MS};
use crate::core::store::PageStore;
use gloo::console;
use gloo_timers::callback::Timeout;
use web_sys::HtmlAudioElement;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(CounterCard)]
pub(crate) fn counter_card() -> Html {
    let value = use_selector(|store: &PageStore| store.counter.value);
    let dispatch = Dispatch::<PageStore>::new();
    let pulsing = use_state(|| false);
    let pulse_timer = use_mut_ref(|| None as Option<Timeout>);
    let cue = use_node_ref();

    let act = {
        let pulsing = pulsing.clone();
        let cue = cue.clone();
        move |action: CounterAction| {
            let dispatch = dispatch.clone();
            let pulsing = pulsing.clone();
            let pulse_timer = pulse_timer.clone();
            let cue = cue.clone();
            Callback::from(move |_: MouseEvent| {
                dispatch.reduce_mut(|store| state::apply(&mut store.counter, action));

                pulsing.set(true);
                let settle = {
                    let pulsing = pulsing.clone();
                    let slot = pulse_timer.clone();
                    Timeout::new(PULSE_MS, move || {
                        slot.borrow_mut().take();
                        pulsing.set(false);
                    })
                };
                // Replacing a pending timeout drops it, which cancels it.
                *pulse_timer.borrow_mut() = Some(settle);

                // Clamped presses land on the ceiling again and re-trigger the cue.
                if state::plays_cue(dispatch.get().counter.value) {
                    replay_cue(&cue);
                }
            })
        }
    };

    let milestone = state::milestone_for(*value);
    let value_style = milestone
        .and_then(Milestone::tone)
        .map(|tone| format!("color: {}", tone.color()));
    let message = milestone.map_or("", Milestone::message);

    html! {
        <div class="counter-card">
            <span class={classes!("counter-value", pulsing.then_some("pulse"))} style={value_style}>
                {*value}
            </span>
            <div class="counter-controls">
                <button class="ghost" onclick={act(CounterAction::Decrement)} aria-label="Decrement">
                    {"−"}
                </button>
                <button onclick={act(CounterAction::Increment)} aria-label="Increment">
                    {"+"}
                </button>
                <button class="ghost" onclick={act(CounterAction::Reset)}>{"Reset"}</button>
            </div>
            <progress
                class="counter-progress"
                value={state::progress_value(*value).to_string()}
                max={MAX_VALUE.to_string()}
                aria-label="Distance from zero"
            />
            <p class="counter-message" role="status">{message}</p>
            <audio ref={cue} src="assets/beep.wav" preload="auto" />
        </div>
    }
}

fn replay_cue(cue: &NodeRef) {
    if let Some(audio) = cue.cast::<HtmlAudioElement>() {
        audio.set_current_time(0.0);
        if let Err(err) = audio.play() {
            // Autoplay policies can reject playback before any interaction.
            console::debug!("cue playback rejected", err);
        }
    }
}
