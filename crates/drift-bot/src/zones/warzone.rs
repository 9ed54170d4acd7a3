//! The open-field combat zone.

use drift_behavior::{Behavior, BehaviorNode, BehaviorRepository, ExecuteContext, TreeBuilder};
use drift_core::Vec2;
use drift_game::InputAction;
use drift_map::TileId;

use crate::nodes::{
    AimNode, FaceNode, GoToNode, InRegionNode, InputActionNode, NearestTargetNode, PlayerPositionQueryNode,
    SeekNode, ShipQueryNode, ShipRequestNode, TileQueryNode, VisibilityQueryNode, Weapon,
};
use crate::zones::{Zone, ZoneController};

pub struct WarzoneController;

impl ZoneController for WarzoneController {
    fn is_zone(&self, zone: Zone) -> bool {
        zone == Zone::Warzone
    }

    fn create_behaviors(&mut self, _arena: &str, repo: &mut BehaviorRepository) {
        log::info!("registering warzone behaviors");
        repo.add("center", Box::new(CenterBehavior));
    }

    fn default_behavior(&self) -> &'static str {
        "center"
    }
}

/// Mid-map brawler: stay in the center region, pick the nearest enemy,
/// path to them when out of sight, chase-and-shoot when visible.
pub struct CenterBehavior;

const CENTER: Vec2 = Vec2 { x: 512.0, y: 512.0 };

impl Behavior for CenterBehavior {
    fn on_initialize(&mut self, ctx: &mut ExecuteContext<'_>) {
        ctx.blackboard.set("request_ship", 0i32);
    }

    fn create_tree(&mut self, _ctx: &mut ExecuteContext<'_>) -> Box<dyn BehaviorNode> {
        TreeBuilder::new()
            .selector()
                // Not in the requested ship yet: keep asking.
                .sequence()
                    .invert_child(ShipQueryNode::from_key("request_ship"))
                    .child(ShipRequestNode::from_key("request_ship"))
                .end()
                // Cut off from the center region: warp back.
                .sequence()
                    .invert_child(InRegionNode::new(CENTER))
                    .child(InputActionNode::new(InputAction::Warp))
                .end()
                // Combat.
                .sequence()
                    .child(NearestTargetNode::new("nearest_target"))
                    .child(PlayerPositionQueryNode::new("nearest_target", "nearest_target_position"))
                    .selector()
                        // No line of sight: path toward them.
                        .sequence()
                            .invert_child(VisibilityQueryNode::new("nearest_target_position"))
                            .child(GoToNode::new("nearest_target_position"))
                        .end()
                        // Visible: lead the shot, chase at leash distance,
                        // and fire unless sitting in a safe tile.
                        .sequence()
                            .child(AimNode::new(Weapon::Bullet, "nearest_target", "aimshot"))
                            .parallel()
                                .child(FaceNode::new("aimshot"))
                                .child(SeekNode::with_distance("aimshot", "leash_distance"))
                                .sequence()
                                    .invert_child(TileQueryNode::new(TileId::SAFE))
                                    .child(InputActionNode::new(InputAction::Bullet))
                                .end()
                            .end()
                        .end()
                    .end()
                .end()
            .end()
            .build()
    }
}
