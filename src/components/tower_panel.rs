use yew::prelude::*;

use crate::sim::snapshot::TowerView;

#[derive(Properties, PartialEq, Clone)]
pub struct TowerPanelProps {
    pub tower: Option<TowerView>,
    pub can_upgrade: bool,
    pub on_upgrade: Callback<()>,
}

#[function_component]
pub fn TowerPanel(props: &TowerPanelProps) -> Html {
    let upgrade_cb = {
        let cb = props.on_upgrade.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let row = |label: &str, value: String| {
        html! {<div style="display:flex; justify-content:space-between; gap:12px;">
            <span style="opacity:0.75;">{ label.to_string() }</span>
            <span style="font-variant-numeric:tabular-nums;">{ value }</span>
        </div>}
    };
    let (body, label) = match &props.tower {
        Some(t) => (
            html! {<>
                { row("Tier", format!("T{}", t.tier)) }
                { row("Damage", format!("{:.1} ({})", t.damage, t.role.label())) }
                { row("Speed", format!("{:.2}", t.attack_speed)) }
                { row("Range", format!("{}", t.range)) }
                { row("Level", t.level.to_string()) }
            </>},
            format!("Upgrade ({}G)", t.upgrade_cost),
        ),
        None => (
            html! {<div style="font-size:13px; opacity:0.8;">{"Select a tower to inspect it"}</div>},
            "Upgrade (0G)".to_string(),
        ),
    };
    html! {<div style="position:absolute; left:50%; bottom:28px; transform:translateX(-50%); background:rgba(22,27,34,0.92); border:1px solid #30363d; border-radius:10px; padding:10px 14px; display:flex; flex-direction:column; gap:6px; min-width:240px; font-size:13px;">
        { body }
        <button onclick={upgrade_cb} disabled={!props.can_upgrade}>{ label }</button>
    </div> }
}
