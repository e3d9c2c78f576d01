use super::types::{Edge, GraphNode, NODES, node_position};

pub const MARKER_RADIUS: f64 = 2.0;
pub const GLOW_RADIUS: f64 = 3.0;
pub const CORE_RADIUS: f64 = 0.6;
pub const LABEL_HEIGHT: f64 = 5.5;
pub const YEAR_BOX_WIDTH: f64 = 13.0;
pub const YEAR_FONT_SIZE: f64 = 4.5;

const AMBER: &str = "#f59e0b";
const GOLD: &str = "#fbbf24";
const SLATE: &str = "#1e293b";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

impl Rect {
	fn centered(cx: f64, y: f64, width: f64) -> Self {
		Self {
			x: cx - width / 2.0,
			y,
			width,
			height: LABEL_HEIGHT,
		}
	}
}

/// Width class of a price label, picked from the label text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriceTier {
	/// A price range such as "$3 to $30".
	Range,
	Long,
	Unknown,
	Standard,
}

impl PriceTier {
	pub fn of(text: &str) -> Self {
		if text.contains("to") || text.contains(',') {
			Self::Range
		} else if text.chars().count() > 8 {
			Self::Long
		} else if text == "?" {
			Self::Unknown
		} else {
			Self::Standard
		}
	}

	pub fn box_width(self) -> f64 {
		match self {
			Self::Range => 22.0,
			Self::Long => 20.0,
			Self::Unknown => 6.0,
			Self::Standard => 16.0,
		}
	}

	pub fn font_size(self) -> f64 {
		match self {
			Self::Range => 3.0,
			Self::Long => 3.5,
			Self::Unknown => 5.0,
			Self::Standard => 4.0,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeStyle {
	pub glow_fill: &'static str,
	pub marker_fill: &'static str,
	pub marker_stroke: &'static str,
	pub price_fill: &'static str,
	pub price_weight: &'static str,
}

impl NodeStyle {
	fn for_node(node: &GraphNode) -> Self {
		if node.is_halving_event {
			Self {
				glow_fill: AMBER,
				marker_fill: AMBER,
				marker_stroke: GOLD,
				price_fill: GOLD,
				price_weight: "700",
			}
		} else {
			Self {
				glow_fill: GOLD,
				marker_fill: SLATE,
				marker_stroke: AMBER,
				price_fill: "#ffffff",
				price_weight: "600",
			}
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeLayout {
	pub center: Point,
	pub marker_radius: f64,
	pub glow_radius: f64,
	pub core_radius: f64,
	pub year_box: Rect,
	pub price_box: Rect,
	pub year_text: Point,
	pub price_text: Point,
	pub price_font_size: f64,
	pub style: NodeStyle,
}

/// Resolves every drawable primitive for one node. Nodes in the top half of the
/// canvas carry their year above and price below; bottom-half nodes are flipped.
pub fn layout(node: &GraphNode) -> NodeLayout {
	let (x, y) = (node.x, node.y);
	let is_top = y < 50.0;
	let (above_box, above_text, below_box, below_text) = (y - 10.0, y - 5.8, y + 4.0, y + 8.0);
	let (year_box_y, year_text_y, price_box_y, price_text_y) = if is_top {
		(above_box, above_text, below_box, below_text)
	} else {
		(below_box, below_text, above_box, above_text)
	};
	let tier = PriceTier::of(node.price_label);

	NodeLayout {
		center: Point { x, y },
		marker_radius: MARKER_RADIUS,
		glow_radius: GLOW_RADIUS,
		core_radius: CORE_RADIUS,
		year_box: Rect::centered(x, year_box_y, YEAR_BOX_WIDTH),
		price_box: Rect::centered(x, price_box_y, tier.box_width()),
		year_text: Point { x, y: year_text_y },
		price_text: Point { x, y: price_text_y },
		price_font_size: tier.font_size(),
		style: NodeStyle::for_node(node),
	}
}

pub fn is_node_visible(position: usize, reveal_count: usize) -> bool {
	position < reveal_count
}

/// An edge shows together with its later endpoint.
pub fn is_edge_visible(edge: &Edge, reveal_count: usize) -> bool {
	match (node_position(edge.from), node_position(edge.to)) {
		(Some(_), Some(to)) => is_node_visible(to, reveal_count),
		_ => false,
	}
}

pub fn visible_nodes(reveal_count: usize) -> impl Iterator<Item = &'static GraphNode> {
	NODES
		.iter()
		.enumerate()
		.filter(move |(i, _)| is_node_visible(*i, reveal_count))
		.map(|(_, n)| n)
}
