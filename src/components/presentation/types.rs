/// A block-reward halving, shown as one row of the reveal list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HalvingEvent {
	pub year: u16,
	pub reward_label: &'static str,
}

/// A plotted point on the pattern graph. Coordinates are in the 100x100 SVG viewBox.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphNode {
	pub id: u32,
	pub year_label: &'static str,
	pub price_label: &'static str,
	pub is_halving_event: bool,
	pub x: f64,
	pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
	pub from: u32,
	pub to: u32,
}

pub const HALVINGS: &[HalvingEvent] = &[
	HalvingEvent { year: 2008, reward_label: "50 BTC" },
	HalvingEvent { year: 2012, reward_label: "25 BTC" },
	HalvingEvent { year: 2016, reward_label: "12.50 BTC" },
	HalvingEvent { year: 2020, reward_label: "6.25 BTC" },
	HalvingEvent { year: 2024, reward_label: "3.125 BTC" },
];

const fn node(
	id: u32,
	year_label: &'static str,
	price_label: &'static str,
	is_halving_event: bool,
	x: f64,
	y: f64,
) -> GraphNode {
	GraphNode { id, year_label, price_label, is_halving_event, x, y }
}

pub const NODES: &[GraphNode] = &[
	node(1, "2011", "$3 to $30", false, 4.0, 85.0),
	node(2, "2012", "(Halving)", true, 18.0, 70.0),
	node(3, "2013", "$1000", false, 26.0, 50.0),
	node(4, "2015", "$220", false, 34.0, 85.0),
	node(5, "2016", "(Halving)", true, 42.0, 63.0),
	node(6, "2017", "$19000", false, 50.0, 30.0),
	node(7, "2019", "$3500", false, 58.0, 85.0),
	node(8, "2020", "(Halving)", true, 66.0, 56.0),
	node(9, "2021", "$69000", false, 74.0, 18.0),
	node(10, "2023", "$17000", false, 82.0, 85.0),
	node(11, "2024", "(Halving)", true, 88.0, 50.0),
	node(12, "2025", "$126000", false, 94.0, 10.0),
	node(13, "2027", "?", false, 96.0, 85.0),
];

pub const EDGES: &[Edge] = &[
	Edge { from: 1, to: 2 },
	Edge { from: 2, to: 3 },
	Edge { from: 3, to: 4 },
	Edge { from: 4, to: 5 },
	Edge { from: 5, to: 6 },
	Edge { from: 6, to: 7 },
	Edge { from: 7, to: 8 },
	Edge { from: 8, to: 9 },
	Edge { from: 9, to: 10 },
	Edge { from: 10, to: 11 },
	Edge { from: 11, to: 12 },
	Edge { from: 12, to: 13 },
];

/// Position of the node with `id` in [`NODES`].
pub fn node_position(id: u32) -> Option<usize> {
	NODES.iter().position(|n| n.id == id)
}

pub fn node_by_id(id: u32) -> Option<&'static GraphNode> {
	NODES.iter().find(|n| n.id == id)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn halvings_are_chronological() {
		assert_eq!(HALVINGS.len(), 5);
		assert!(HALVINGS.windows(2).all(|w| w[0].year < w[1].year));
	}

	#[test]
	fn node_ids_are_dense_from_one() {
		for (i, n) in NODES.iter().enumerate() {
			assert_eq!(n.id as usize, i + 1);
			assert!((0.0..=100.0).contains(&n.x) && (0.0..=100.0).contains(&n.y));
		}
	}

	#[test]
	fn edges_form_a_single_path() {
		assert_eq!(EDGES.len(), NODES.len() - 1);
		for (i, e) in EDGES.iter().enumerate() {
			assert_eq!((e.from, e.to), (i as u32 + 1, i as u32 + 2));
			assert!(node_by_id(e.from).is_some() && node_by_id(e.to).is_some());
		}
	}

	#[test]
	fn position_lookup() {
		assert_eq!(node_position(1), Some(0));
		assert_eq!(node_position(13), Some(12));
		assert_eq!(node_position(99), None);
	}
}
