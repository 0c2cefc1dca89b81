use crate::util::format_time;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TimeDisplayProps {
    pub phase: &'static str,
    pub seconds_left: u32,
}

#[function_component(TimeDisplay)]
pub fn time_display(props: &TimeDisplayProps) -> Html {
    let color = if props.phase == "Fight" { "#f85149" } else { "#3fb950" };
    html! {<div style="position:absolute; top:12px; left:50%; transform:translateX(-50%); display:flex; flex-direction:column; align-items:center; gap:2px;">
        <div style={format!("font-size:13px; font-weight:600; letter-spacing:1px; color:{};", color)}>{ props.phase.to_uppercase() }</div>
        <div style="font-size:20px; font-weight:600;">{ format_time(props.seconds_left as u64) }</div>
    </div>}
}
