use crate::dialogs::DialogMessage;
use crate::host::NodeId;

#[derive(Debug, Clone)]
pub enum Message {
    // Selection
    SelectNode(NodeId),
    ExtendSelection(NodeId),

    // Toolbar
    OpenInsertTable,
    OpenInsertLink,

    // Modal
    DismissModal,
    Dialog(DialogMessage),
}
