/// Configuration of the mainnet jetton master with comments describing the
/// purpose and possible values of every field.
///
/// # Checking alternative values of options
///
/// For options having several fixed alternatives, there are tests
/// verifying that every alternative parses with the rest of the
/// config.
///
/// In order to take advantage of this feature, prefix alternatives
/// with a special "EXAMPLE:" marker in the comment above the
/// option.
///
/// For example, for a config of the following form
///
/// ```text
/// <prefix>
/// // EXAMPLE: y: "a"
/// // Some docs
/// //
/// // EXAMPLE: x: "b"
/// // More docs
/// y: "c"
/// <suffix>
/// ```
///
/// the tests will check that the following config files can be parsed
/// successfully:
///   * `<prefix> y: "a" <suffix>`
///   * `<prefix> x: "b" <suffix>`
///   * `<prefix> y: "c" <suffix>`
///
/// All the examples of an option need to be in a single continuous block
/// of comments, with no blank line between the comments and the value.
pub const SAMPLE_CONFIG: &str = r#"
{
    // ============================================
    // Jetton master
    // ============================================
    network: {
        // EXAMPLE: network: "testnet",
        network: "mainnet",
        // Address of the deployed jetton master.
        master_address: "EQDsOreZxZkTRYmU1RbqU4Gj-vLPH4ou2GEpgIm_tSt740sr",
        // Multisig wallet owning the master. Only this wallet can mint and
        // update the content.
        owner_address: "EQCY8a7rHtvsyCpw-ZrwG4lkkhU79ppKQVT1OIIGrkXSN9wI",
    },

    // ============================================
    // Token metadata
    // ============================================
    metadata: {
        // JSON document with the token metadata, referenced by the content
        // cell when no on-chain metadata is configured.
        uri: "https://kiwi.eu.com/kwt/metadata.json",
        // When set, the metadata is stored in the content cell itself.
        // EXAMPLE: onchain: { name: "Kiwi Token", symbol: "KWT", description: "Kiwi utility token", image: "https://kiwi.eu.com/kwt/logo.png", decimals: 9 },
        // EXAMPLE: onchain: { name: "Kiwi Token", symbol: "KWT" },
        onchain: null,
    },

    // ============================================
    // Initial allocation
    // ============================================
    allocation: {
        // Bucket receiving the burn reserve reported by the master.
        reserved_label: "BURN_RESERVE",
        // The rest of the max supply is split by these weights, in whole
        // percent adding up to 100. The rounding remainder goes to the
        // bucket with the largest weight.
        weights: [
            { label: "TREASURY", weight_percent: 50 },
            { label: "TEAM", weight_percent: 30 },
            { label: "AIRDROP", weight_percent: 20 },
        ],
        // Receiving wallet of every bucket.
        destinations: {
            AIRDROP: "UQA1CmtLSWj7MyAlFo7Hf1G1ACoQpSWuS2PDP4w6x-hHm-RK",
            TREASURY: "UQBRMP2yDQDqoy9TNkx8VDqpx5Xs9N1NjyCkzkNWPEeBNbcT",
            TEAM: "UQAoYk-kXRulgzWU5d-H5TB49sEglrDK5BvMlnYrGu117BOx",
            BURN_RESERVE: "UQByU6VQYPHZCh6jJ7oE7kIUjWZu_MdUWP9t70pS1TAltBmL",
        },
    },

    // ============================================
    // Waiting for transactions
    // ============================================
    retry: {
        // Number of reads of the master state before a submitted
        // transaction is considered lost.
        max_attempts: 6,
        // Seconds between two reads.
        poll_interval_secs: 5,
        // Seconds between two mint transactions.
        mint_spacing_secs: 15,
    },

    // ============================================
    // Logger
    // ============================================
    logger: {
        // The max level to log.
        // EXAMPLE: level: "critical",
        // EXAMPLE: level: "error",
        // EXAMPLE: level: "warning",
        // EXAMPLE: level: "debug",
        // EXAMPLE: level: "trace",
        level: "info",
        // EXAMPLE: target: "stderr",
        // EXAMPLE: target: { file: "/var/log/jetton.log" },
        target: "stdout",
        // If set to false, log lines are dropped while the queue is full.
        block_on_overflow: true,
    },
}
"#;

/// Configuration of the testnet jetton master.
pub const SAMPLE_TESTNET_CONFIG: &str = r#"
{
    network: {
        network: "testnet",
        master_address: "UQCM8zF41FQoZR-p4WocrILZEp0bMJZtpl94T3AmD-h7zLJa",
        owner_address: "EQCk_siNjSBU7senQQ9BG4N8JZNWpXmmDOTCcD0lxR5xBmv8",
    },
    metadata: {
        uri: "https://kiwi.eu.com/kwt/metadata.json",
    },
    allocation: {
        destinations: {
            AIRDROP: "0QCeE6d9CQg50dOTROhNmhkvYnRoPFvDWzwpJKJtupdkquVp",
            TREASURY: "0QA3o9RxGalIgXUt2NFxuq8Ibj6f1BrlkY91MIM53QqnS812",
            TEAM: "0QDlnqKxaV_KnSbjuwGAZF_y-9nBg8ZNQGjbw-rzUxKjLtGF",
            BURN_RESERVE: "0QCBhnS41k_7o_WPujLxewYAgAJVwOjunMPZ0YprFvOd4xFf",
        },
    },
    logger: {
        level: "debug",
    },
}
"#;
