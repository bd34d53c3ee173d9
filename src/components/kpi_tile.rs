use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    fn glyph(&self) -> &'static str {
        match self {
            Trend::Up => "↗",
            Trend::Down => "↘",
            Trend::Flat => "→",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileVariant {
    #[default]
    Default,
    Destructive,
    Warning,
    Success,
}

impl TileVariant {
    fn class(&self) -> &'static str {
        match self {
            TileVariant::Default => "kpi-default",
            TileVariant::Destructive => "kpi-destructive",
            TileVariant::Warning => "kpi-warning",
            TileVariant::Success => "kpi-success",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct KpiTileProps {
    pub title: AttrValue,
    pub value: AttrValue,
    pub icon: AttrValue,
    #[prop_or_default]
    pub trend: Option<Trend>,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub variant: TileVariant,
}

#[function_component(KpiTile)]
pub fn kpi_tile(props: &KpiTileProps) -> Html {
    html! {
        <div class={classes!("kpi-tile", props.variant.class())}>
            <div class="kpi-indicator"></div>
            <div class="kpi-body">
                <p class="kpi-title">{ props.title.clone() }</p>
                <p class="kpi-value">{ props.value.clone() }</p>
                if let Some(subtitle) = &props.subtitle {
                    <div class="kpi-subtitle">
                        if let Some(trend) = props.trend {
                            <span class="kpi-trend">{ trend.glyph() }</span>
                        }
                        <span>{ subtitle.clone() }</span>
                    </div>
                }
            </div>
            <div class="kpi-icon">{ props.icon.clone() }</div>
        </div>
    }
}
