//! Plain-text character sheet.

use koen_core::Player;

/// Render the player's stats and inventory.
pub fn render_stats(player: &Player) -> String {
    let mut out = format!(
        "=== {}'s Stats ===\nHealth: {}/{}\nLevel: {}\nExperience: {}\nKoen: {}\nEquipped Weapon: {}\n\nInventory:",
        player.name(),
        player.health(),
        player.max_health(),
        player.level(),
        player.experience(),
        player.gold(),
        player.equipped_weapon().unwrap_or("None"),
    );
    if player.inventory().is_empty() {
        out.push_str("\nEmpty");
    }
    for item in player.inventory() {
        out.push_str(&format!("\n- {item}"));
    }
    out
}
