// ============================================================================
// DIRECTORY VIEW - Activity cards + activity <select>, rebuilt from scratch
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, clear_children, require_element, ElementBuilder};
use crate::utils::constants::{
    ATTR_ACTIVITY, ATTR_EMAIL, DELETE_BUTTON_CLASS, ID_ACTIVITIES_LIST, ID_ACTIVITY_SELECT, MSG_NO_PARTICIPANTS,
};
use crate::viewmodels::{ActivityCard, DirectoryBody, DirectoryView, ParticipantRow, SelectOption};

/// Delete buttons carry their activity and email as data attributes; clicks are
/// handled by the single listener `App` binds on the list.
pub fn render_directory(view: &DirectoryView) -> Result<(), JsValue> {
    let list = require_element(ID_ACTIVITIES_LIST)?;
    clear_children(&list);

    match &view.body {
        DirectoryBody::Message(text) => {
            let message = ElementBuilder::new("p")?.text(text).build();
            append_child(&list, &message)?;
        }
        DirectoryBody::Cards(cards) => {
            for card in cards {
                append_child(&list, &render_card(card)?)?;
            }
        }
    }

    render_options(&view.select_options())
}

fn render_card(card: &ActivityCard) -> Result<Element, JsValue> {
    let schedule = ElementBuilder::new("p")?
        .child(ElementBuilder::new("strong")?.text("Schedule:").build())?
        .append_text(&format!(" {}", card.schedule))?
        .build();

    let availability = ElementBuilder::new("p")?
        .child(ElementBuilder::new("strong")?.text("Availability:").build())?
        .append_text(&format!(" {} spots left", card.spots_left))?
        .build();

    let participants = ElementBuilder::new("div")?
        .class("participants-container")
        .child(render_participants(&card.participants)?)?
        .build();

    let class = if card.over_capacity { "activity-card over-capacity" } else { "activity-card" };
    Ok(ElementBuilder::new("div")?
        .class(class)
        .child(ElementBuilder::new("h4")?.text(&card.name).build())?
        .child(ElementBuilder::new("p")?.text(&card.description).build())?
        .child(schedule)?
        .child(availability)?
        .child(participants)?
        .build())
}

fn render_participants(rows: &[ParticipantRow]) -> Result<Element, JsValue> {
    if rows.is_empty() {
        return Ok(ElementBuilder::new("p")?
            .child(ElementBuilder::new("em")?.text(MSG_NO_PARTICIPANTS).build())?
            .build());
    }

    let list = ElementBuilder::new("ul")?.class("participants-list").build();
    for row in rows {
        let item = ElementBuilder::new("li")?
            .child(ElementBuilder::new("span")?.class("participant-email").text(&row.email).build())?
            .build();

        // delete buttons only exist when the row says so
        if row.removable {
            let button = ElementBuilder::new("button")?
                .class(DELETE_BUTTON_CLASS)
                .attr(ATTR_ACTIVITY, &row.activity)?
                .attr(ATTR_EMAIL, &row.email)?
                .text("❌")
                .build();
            append_child(&item, &button)?;
        }
        append_child(&list, &item)?;
    }

    Ok(ElementBuilder::new("div")?
        .class("participants-section")
        .child(ElementBuilder::new("h5")?.text("Participants:").build())?
        .child(list)?
        .build())
}

fn render_options(options: &[SelectOption]) -> Result<(), JsValue> {
    let select = require_element(ID_ACTIVITY_SELECT)?;
    clear_children(&select);

    for option in options {
        let element = ElementBuilder::new("option")?
            .attr("value", &option.value)?
            .text(&option.label)
            .build();
        append_child(&select, &element)?;
    }
    Ok(())
}
