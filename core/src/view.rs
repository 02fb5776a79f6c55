//! Declarative view tree
//!
//! A [`Screen`] renders its state into a [`Node`] tree. Event handlers are
//! stored in the tree as the action they produce, so delivering a click is
//! just reading the action off the clicked node and sending it to the Store.
//!
//! Rendering is a pure function of state: the runtime re-renders the whole
//! tree after every mutation pass, there is no incremental update.
//!
//! ```
//! use uiflow_core::view::Node;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum Action {
//!     Add,
//! }
//!
//! let frame = Node::column(vec![
//!     Node::text("Nothing yet"),
//!     Node::button("Add", false, Action::Add),
//! ]);
//!
//! assert!(frame.has_text("Nothing yet"));
//! assert_eq!(frame.find_text("Add").and_then(Node::click), None); // disabled
//! ```

use std::fmt;
use std::sync::Arc;

/// Handler turning the new contents of a text field into an action
pub type InputHandler<A> = Arc<dyn Fn(String) -> A + Send + Sync>;

/// Text decoration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Decoration {
    /// Plain text
    #[default]
    None,
    /// Struck-through text
    LineThrough,
}

/// Icons available to icon buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// Plus sign
    Add,
    /// Eye
    Visibility,
    /// Cross
    Close,
}

impl Icon {
    fn glyph(self, alpha: f32) -> &'static str {
        match self {
            Icon::Add => "+",
            Icon::Close => "x",
            Icon::Visibility if alpha >= 0.5 => "●",
            Icon::Visibility => "○",
        }
    }
}

/// A node of the rendered view tree
pub enum Node<A> {
    /// Children stacked vertically
    Column(Vec<Node<A>>),

    /// Children laid out horizontally
    Row(Vec<Node<A>>),

    /// Static text
    Text {
        /// Displayed text
        content: String,
        /// Decoration applied to the text
        decoration: Decoration,
    },

    /// Labelled button
    Button {
        /// Button label
        label: String,
        /// Disabled buttons swallow clicks
        enabled: bool,
        /// Action sent on click
        on_click: A,
    },

    /// Icon-only button, addressed by its content description
    IconButton {
        /// Icon shown
        icon: Icon,
        /// Accessibility description
        description: String,
        /// Icon opacity in `0.0..=1.0`
        alpha: f32,
        /// Action sent on click
        on_click: A,
    },

    /// Single-line text input, addressed by its label
    TextField {
        /// Field label
        label: String,
        /// Current contents
        value: String,
        /// Action produced from the edited contents
        on_change: InputHandler<A>,
    },
}

impl<A> Node<A> {
    /// Vertical container
    #[must_use]
    pub const fn column(children: Vec<Node<A>>) -> Self {
        Node::Column(children)
    }

    /// Horizontal container
    #[must_use]
    pub const fn row(children: Vec<Node<A>>) -> Self {
        Node::Row(children)
    }

    /// Plain text
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::decorated_text(content, Decoration::None)
    }

    /// Text with a decoration
    #[must_use]
    pub fn decorated_text(content: impl Into<String>, decoration: Decoration) -> Self {
        Node::Text {
            content: content.into(),
            decoration,
        }
    }

    /// Labelled button
    #[must_use]
    pub fn button(label: impl Into<String>, enabled: bool, on_click: A) -> Self {
        Node::Button {
            label: label.into(),
            enabled,
            on_click,
        }
    }

    /// Icon button with a content description
    #[must_use]
    pub fn icon_button(icon: Icon, description: impl Into<String>, alpha: f32, on_click: A) -> Self {
        Node::IconButton {
            icon,
            description: description.into(),
            alpha,
            on_click,
        }
    }

    /// Text field with a change handler
    #[must_use]
    pub fn text_field(
        label: impl Into<String>,
        value: impl Into<String>,
        on_change: impl Fn(String) -> A + Send + Sync + 'static,
    ) -> Self {
        Node::TextField {
            label: label.into(),
            value: value.into(),
            on_change: Arc::new(on_change),
        }
    }

    /// Direct children of a container, empty for leaves
    #[must_use]
    pub fn children(&self) -> &[Node<A>] {
        match self {
            Node::Column(children) | Node::Row(children) => children,
            _ => &[],
        }
    }

    /// All nodes of the tree in pre-order, starting with `self`
    #[must_use]
    pub fn nodes(&self) -> Vec<&Node<A>> {
        let mut out = Vec::new();
        self.collect_nodes(&mut out);
        out
    }

    fn collect_nodes<'a>(&'a self, out: &mut Vec<&'a Node<A>>) {
        out.push(self);
        for child in self.children() {
            child.collect_nodes(out);
        }
    }

    /// First text or button whose visible text equals `text`
    #[must_use]
    pub fn find_text(&self, text: &str) -> Option<&Node<A>> {
        self.nodes().into_iter().find(|node| match node {
            Node::Text { content, .. } => content == text,
            Node::Button { label, .. } => label == text,
            _ => false,
        })
    }

    /// First button labelled `label`
    ///
    /// Text nodes are skipped even when their content equals `label`.
    #[must_use]
    pub fn find_button(&self, label: &str) -> Option<&Node<A>> {
        self.nodes()
            .into_iter()
            .find(|node| matches!(node, Node::Button { label: l, .. } if l == label))
    }

    /// Every icon button or text field described by `description`, in order
    #[must_use]
    pub fn find_all_descriptions(&self, description: &str) -> Vec<&Node<A>> {
        self.nodes()
            .into_iter()
            .filter(|node| match node {
                Node::IconButton { description: d, .. } => d == description,
                Node::TextField { label, .. } => label == description,
                _ => false,
            })
            .collect()
    }

    /// First icon button or text field described by `description`
    #[must_use]
    pub fn find_description(&self, description: &str) -> Option<&Node<A>> {
        self.find_all_descriptions(description).into_iter().next()
    }

    /// Whether any text or button shows exactly `text`
    #[must_use]
    pub fn has_text(&self, text: &str) -> bool {
        self.find_text(text).is_some()
    }

    /// Contents of every `Text` node, in order
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.nodes()
            .into_iter()
            .filter_map(|node| match node {
                Node::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The action a click on this node produces
    ///
    /// `None` for disabled buttons and for nodes that are not clickable.
    #[must_use]
    pub fn click(&self) -> Option<A>
    where
        A: Clone,
    {
        match self {
            Node::Button {
                enabled: true,
                on_click,
                ..
            }
            | Node::IconButton { on_click, .. } => Some(on_click.clone()),
            _ => None,
        }
    }

    /// The action produced by replacing this text field's contents
    ///
    /// `None` if the node is not a text field.
    #[must_use]
    pub fn input(&self, text: impl Into<String>) -> Option<A> {
        match self {
            Node::TextField { on_change, .. } => Some(on_change(text.into())),
            _ => None,
        }
    }

    /// Re-target every handler of the tree to a parent action type
    #[must_use]
    pub fn map<B, F>(self, f: F) -> Node<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        self.map_shared(&Arc::new(f))
    }

    fn map_shared<B, F>(self, f: &Arc<F>) -> Node<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        match self {
            Node::Column(children) => Node::Column(children.into_iter().map(|c| c.map_shared(f)).collect()),
            Node::Row(children) => Node::Row(children.into_iter().map(|c| c.map_shared(f)).collect()),
            Node::Text { content, decoration } => Node::Text { content, decoration },
            Node::Button {
                label,
                enabled,
                on_click,
            } => Node::Button {
                label,
                enabled,
                on_click: f(on_click),
            },
            Node::IconButton {
                icon,
                description,
                alpha,
                on_click,
            } => Node::IconButton {
                icon,
                description,
                alpha,
                on_click: f(on_click),
            },
            Node::TextField {
                label,
                value,
                on_change,
            } => {
                let f = Arc::clone(f);
                Node::TextField {
                    label,
                    value,
                    on_change: Arc::new(move |text| f(on_change(text))),
                }
            },
        }
    }

    fn inline(&self) -> String {
        match self {
            Node::Column(children) | Node::Row(children) => {
                children.iter().map(Node::inline).collect::<Vec<_>>().join("  ")
            },
            Node::Text {
                content,
                decoration: Decoration::None,
            } => content.clone(),
            Node::Text {
                content,
                decoration: Decoration::LineThrough,
            } => format!("~~{content}~~"),
            Node::Button {
                label, enabled: true, ..
            } => format!("[ {label} ]"),
            Node::Button {
                label, enabled: false, ..
            } => format!("[ {label} (disabled) ]"),
            Node::IconButton { icon, alpha, .. } => format!("({})", icon.glyph(*alpha)),
            Node::TextField { label, value, .. } => format!("{label}: [{value}]"),
        }
    }

    fn write_lines(&self, lines: &mut Vec<String>) {
        match self {
            Node::Column(children) => {
                for child in children {
                    child.write_lines(lines);
                }
            },
            other => lines.push(other.inline()),
        }
    }
}

impl<A> fmt::Display for Node<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = Vec::new();
        self.write_lines(&mut lines);
        write!(f, "{}", lines.join("\n"))
    }
}

impl<A: Clone> Clone for Node<A> {
    fn clone(&self) -> Self {
        match self {
            Node::Column(children) => Node::Column(children.clone()),
            Node::Row(children) => Node::Row(children.clone()),
            Node::Text { content, decoration } => Node::Text {
                content: content.clone(),
                decoration: *decoration,
            },
            Node::Button {
                label,
                enabled,
                on_click,
            } => Node::Button {
                label: label.clone(),
                enabled: *enabled,
                on_click: on_click.clone(),
            },
            Node::IconButton {
                icon,
                description,
                alpha,
                on_click,
            } => Node::IconButton {
                icon: *icon,
                description: description.clone(),
                alpha: *alpha,
                on_click: on_click.clone(),
            },
            Node::TextField {
                label,
                value,
                on_change,
            } => Node::TextField {
                label: label.clone(),
                value: value.clone(),
                on_change: Arc::clone(on_change),
            },
        }
    }
}

// Manual Debug implementation since input handlers don't implement Debug
impl<A: fmt::Debug> fmt::Debug for Node<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Column(children) => f.debug_tuple("Column").field(children).finish(),
            Node::Row(children) => f.debug_tuple("Row").field(children).finish(),
            Node::Text { content, decoration } => f
                .debug_struct("Text")
                .field("content", content)
                .field("decoration", decoration)
                .finish(),
            Node::Button {
                label,
                enabled,
                on_click,
            } => f
                .debug_struct("Button")
                .field("label", label)
                .field("enabled", enabled)
                .field("on_click", on_click)
                .finish(),
            Node::IconButton {
                icon,
                description,
                alpha,
                on_click,
            } => f
                .debug_struct("IconButton")
                .field("icon", icon)
                .field("description", description)
                .field("alpha", alpha)
                .field("on_click", on_click)
                .finish(),
            Node::TextField { label, value, .. } => f
                .debug_struct("TextField")
                .field("label", label)
                .field("value", value)
                .finish_non_exhaustive(),
        }
    }
}

/// A screen - pure rendering of state into a view tree
///
/// # Example
///
/// ```
/// use uiflow_core::view::{Node, Screen};
///
/// struct Greeting;
///
/// impl Screen for Greeting {
///     type State = String;
///     type Action = ();
///
///     fn render(&self, name: &String) -> Node<()> {
///         Node::text(format!("Hello, {name}"))
///     }
/// }
///
/// assert!(Greeting.render(&"Ada".to_string()).has_text("Hello, Ada"));
/// ```
pub trait Screen: Send + Sync {
    /// The state this screen draws
    type State;

    /// The action type its controls produce
    type Action;

    /// Render the full view tree for `state`
    fn render(&self, state: &Self::State) -> Node<Self::Action>;
}
