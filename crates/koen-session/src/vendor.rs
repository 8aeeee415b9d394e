//! The town shop and the blacksmith.

use koen_core::{CoreResult, Item, Player};

/// An item for sale at a fixed price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offer {
    /// The item sold.
    pub item: Item,
    /// Price in koen.
    pub cost: u32,
}

/// A merchant with a fixed price list.
///
/// Menu codes are the 1-based position of each offer; the code after the
/// last offer leaves.
#[derive(Debug, PartialEq, Eq)]
pub struct Vendor {
    /// Display name.
    pub name: &'static str,
    /// Items for sale, in menu order.
    pub offers: &'static [Offer],
}

/// What the player picked from a vendor menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorChoice {
    /// Buy the given offer.
    Buy(Offer),
    /// Walk out.
    Leave,
}

/// The general store.
pub static SHOP: Vendor = Vendor {
    name: "Shop",
    offers: &[
        Offer {
            item: Item::Sword,
            cost: 50,
        },
        Offer {
            item: Item::HealthPotion,
            cost: 70,
        },
        Offer {
            item: Item::Shield,
            cost: 60,
        },
        Offer {
            item: Item::Dagger,
            cost: 100,
        },
        Offer {
            item: Item::Pistol,
            cost: 200,
        },
    ],
};

/// The blacksmith forges weapons cheaper than the shop sells them.
pub static BLACKSMITH: Vendor = Vendor {
    name: "Blacksmith",
    offers: &[
        Offer {
            item: Item::Sword,
            cost: 25,
        },
        Offer {
            item: Item::Dagger,
            cost: 50,
        },
        Offer {
            item: Item::Pistol,
            cost: 100,
        },
    ],
};

impl Vendor {
    /// Menu code that leaves the vendor.
    pub fn leave_code(&self) -> usize {
        self.offers.len() + 1
    }

    /// Parse a menu code or an item name.
    pub fn parse_choice(&self, input: &str) -> Option<VendorChoice> {
        let input = input.trim();
        if let Ok(code) = input.parse::<usize>() {
            if code == self.leave_code() {
                return Some(VendorChoice::Leave);
            }
            return code
                .checked_sub(1)
                .and_then(|i| self.offers.get(i))
                .map(|offer| VendorChoice::Buy(*offer));
        }
        if input.eq_ignore_ascii_case("leave") || input.eq_ignore_ascii_case("exit") {
            return Some(VendorChoice::Leave);
        }
        let item = Item::from_name(input)?;
        self.offers
            .iter()
            .find(|offer| offer.item == item)
            .map(|offer| VendorChoice::Buy(*offer))
    }

    /// Sell an offer to the player.
    ///
    /// On success gold is deducted, the item lands in the inventory, and
    /// weapons are equipped. Nothing changes if the player cannot pay.
    pub fn sell(&self, player: &mut Player, offer: Offer) -> CoreResult<()> {
        player.spend_gold(offer.cost)?;
        player.add_item(offer.item.name());
        if offer.item.is_weapon() {
            player.equip(offer.item.name());
        }
        tracing::debug!(
            vendor = self.name,
            item = %offer.item,
            cost = offer.cost,
            gold_left = player.gold(),
            "purchase"
        );
        Ok(())
    }

    /// Render the price list for a player with `gold` koen.
    pub fn menu(&self, gold: u32) -> String {
        let mut out = format!("=== {} ===\nYour koen: {gold}\n", self.name);
        for (i, offer) in self.offers.iter().enumerate() {
            out.push_str(&format!("{}. {} - {} koen\n", i + 1, offer.item, offer.cost));
        }
        out.push_str(&format!("{}. Leave", self.leave_code()));
        out
    }
}
