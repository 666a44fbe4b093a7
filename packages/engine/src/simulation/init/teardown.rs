use crate::dom::DomElement;

use super::SimulationSession;

pub(super) fn destroy<E: DomElement + 'static>(session: &mut SimulationSession<E>) {
    session.pending_top_wall = None;
    let Some(mut live) = session.live.take() else {
        return;
    };

    live.runner.stop();
    if let Some(pc) = live.world.pointer_constraint_mut() {
        pc.release();
    }
    // drops the observers, and with them their handles on `shared`
    live.world.clear();

    {
        let mut shared = live.shared.borrow_mut();
        shared.registry.clear();
        shared.drag = None;
        shared.rendered = 0;
    }

    engine_log!("world destroyed (generation {})", live.generation);
}
