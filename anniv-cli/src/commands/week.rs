use anniv_core::generate_events;
use anniv_core::reminder::due_this_week;
use anyhow::Result;

use crate::Context;
use crate::render::print_event_list;

pub fn run(ctx: &Context) -> Result<()> {
    let today = ctx.today();
    let events = generate_events(&ctx.settings, today);

    print_event_list("이번 주", &due_this_week(&events, today), today);

    Ok(())
}
