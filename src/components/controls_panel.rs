use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub draw_cost: u64,
    pub can_draw: bool,
    pub on_draw: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let draw_cb = {
        let cb = props.on_draw.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:200px; display:flex; flex-direction:column; gap:6px;">
        <button onclick={draw_cb} disabled={!props.can_draw}>{ format!("Draw Tower ({}G)", props.draw_cost) }</button>
        <div style="font-size:11px; opacity:0.7;">{"Drag a tower inside the field; drop it outside to refund a fresh draw"}</div>
    </div>}
}
