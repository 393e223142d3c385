use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExpandableCardProps {
    /// Cards on the case listing link out instead of expanding.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    pub children: Children,
}

#[function_component(ExpandableCard)]
pub fn expandable_card(props: &ExpandableCardProps) -> Html {
    let expanded = use_state(|| false);

    if let Some(href) = &props.href {
        return html! {
            <a class="expandable-card" href={href.clone()}>
                { for props.children.iter() }
            </a>
        };
    }

    let onclick = {
        let expanded = expanded.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            expanded.set(!*expanded);
        })
    };

    html! {
        <div class={classes!("expandable-card", (*expanded).then(|| "expanded"))} {onclick}>
            { for props.children.iter() }
        </div>
    }
}
