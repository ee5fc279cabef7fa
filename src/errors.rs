// Registration
pub const ERR_REGISTRATION_CLOSED: &str = "Registration closed";
pub const ERR_CAPACITY_EXCEEDED: &str = "Capacity exceeded";
pub const ERR_NOT_ELIGIBLE: &str = "Not eligible";
pub const ERR_ALREADY_REGISTERED: &str = "Node already registered";
pub const ERR_UNKNOWN_NODE: &str = "Unknown node";
pub const ERR_CYCLE_IN_PROGRESS: &str = "Refresh cycle in progress";
pub const ERR_EXIT_PENDING: &str = "Exit already requested";

// Refresh cycle
pub const ERR_DUPLICATE_PROPOSAL: &str = "Duplicate proposal";
pub const ERR_PROPOSAL_NOT_FOUND: &str = "Proposal not found";
pub const ERR_VOTING_CLOSED: &str = "Voting closed";
pub const ERR_DEADLINE_PASSED: &str = "Deadline passed";
pub const ERR_INVALID_TRANSITION: &str = "Invalid transition";
pub const ERR_INVALID_CANDIDATE_SET: &str = "Invalid candidate set size";
pub const ERR_DUPLICATE_CANDIDATE: &str = "Duplicate candidate";
pub const ERR_UNAUTHORIZED: &str = "Unauthorized";

// Fund
pub const ERR_INSUFFICIENT_FUNDS: &str = "Insufficient funds";
pub const ERR_ZERO_AMOUNT: &str = "Amount must be positive";

// Configuration & payload
pub const ERR_INVALID_MEMBER_BOUNDS: &str = "Invalid member bounds";
pub const ERR_INVALID_FLUSH_PERIOD: &str = "Invalid flush period";
pub const ERR_COMMITTEE_NOT_FORMED: &str = "Committee not formed";
