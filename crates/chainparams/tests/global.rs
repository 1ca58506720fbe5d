use cbsl_chainparams::{params, params_for, select_params, selected_network, Network, SelectError};

// The process-wide selection can only be exercised once per test binary.
#[test]
fn global_selection_lifecycle() {
    assert_eq!(selected_network(), None);
    assert!(std::panic::catch_unwind(params).is_err());

    assert_eq!(params_for(Network::Testnet).network(), Network::Testnet);

    let profile = select_params(Network::Regtest).expect("select");
    assert_eq!(profile.network(), Network::Regtest);
    assert_eq!(selected_network(), Some(Network::Regtest));
    assert_eq!(params().default_port(), 30005);

    select_params(Network::Regtest).expect("reselect");
    assert_eq!(
        select_params(Network::Mainnet).map(|profile| profile.network()),
        Err(SelectError::AlreadySelected {
            current: Network::Regtest,
            requested: Network::Mainnet,
        })
    );
    assert_eq!(params().network(), Network::Regtest);
}
