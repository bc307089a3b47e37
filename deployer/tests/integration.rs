//! Integration tests for the one-shot faucet proxy deployment.

use cosmwasm_std::{coins, to_json_binary, Addr, Empty, Uint128, WasmMsg};
use cw_multi_test::{App, Contract, ContractWrapper, Executor};

use common::{Asset, AssetInfo, UpgradeMode};
use deployer::msg::{DeploymentResponse, InstantiateMsg, QueryMsg};
use faucet::msg::{
    ConfigResponse, ExecuteMsg as FaucetExecuteMsg, ImplementationResponse,
    QueryMsg as FaucetQueryMsg,
};
use proxy_admin::msg::{
    ExecuteMsg as AdminExecuteMsg, OwnerResponse, ProxyAdminResponse, QueryMsg as AdminQueryMsg,
};

const DENOM: &str = "uluna";

fn contract_deployer() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        deployer::contract::execute,
        deployer::contract::instantiate,
        deployer::contract::query,
    )
    .with_reply(deployer::contract::reply);
    Box::new(contract)
}

fn contract_faucet() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        faucet::contract::execute,
        faucet::contract::instantiate,
        faucet::contract::query,
    )
    .with_migrate(faucet::contract::migrate);
    Box::new(contract)
}

fn contract_proxy_admin() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        proxy_admin::contract::execute,
        proxy_admin::contract::instantiate,
        proxy_admin::contract::query,
    );
    Box::new(contract)
}

struct TestEnv {
    app: App,
    deployer_code_id: u64,
    faucet_code_id: u64,
    proxy_admin_code_id: u64,
    deployer_owner: Addr,
    admin_owner: Addr,
    owner: Addr,
}

fn setup() -> TestEnv {
    let mut app = App::default();
    let deployer_owner = Addr::unchecked("terra1deployer");

    app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(storage, &deployer_owner, coins(1_000_000, DENOM))
            .unwrap();
    });

    TestEnv {
        deployer_code_id: app.store_code(contract_deployer()),
        faucet_code_id: app.store_code(contract_faucet()),
        proxy_admin_code_id: app.store_code(contract_proxy_admin()),
        app,
        deployer_owner,
        admin_owner: Addr::unchecked("terra1adminowner"),
        owner: Addr::unchecked("terra1owner"),
    }
}

fn deploy_msg(env: &TestEnv, cooldown_seconds: u64) -> InstantiateMsg {
    InstantiateMsg {
        faucet_code_id: env.faucet_code_id,
        proxy_admin_code_id: env.proxy_admin_code_id,
        admin_owner: env.admin_owner.to_string(),
        owner: env.owner.to_string(),
        cooldown_seconds,
        tokens: vec![Asset {
            info: AssetInfo::Native {
                denom: DENOM.to_string(),
            },
            amount: Uint128::new(100),
        }],
        label: "faucet".to_string(),
    }
}

fn deploy(env: &mut TestEnv) -> (Addr, DeploymentResponse) {
    let msg = deploy_msg(env, 86_400);
    let deployer = env
        .app
        .instantiate_contract(
            env.deployer_code_id,
            env.deployer_owner.clone(),
            &msg,
            &[],
            "deployer",
            None,
        )
        .unwrap();
    let deployment: DeploymentResponse = env
        .app
        .wrap()
        .query_wasm_smart(&deployer, &QueryMsg::Deployment {})
        .unwrap();
    (deployer, deployment)
}

#[test]
fn test_deploy_wires_proxy_and_admin() {
    let mut env = setup();
    let (_, deployment) = deploy(&mut env);

    // The proxy admin is the chain-level admin of the faucet
    let info = env
        .app
        .wrap()
        .query_wasm_contract_info(&deployment.proxy)
        .unwrap();
    assert_eq!(info.code_id, env.faucet_code_id);
    assert_eq!(info.admin, Some(deployment.admin.to_string()));

    let res: ProxyAdminResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &deployment.admin,
            &AdminQueryMsg::ProxyAdmin {
                proxy: deployment.proxy.to_string(),
            },
        )
        .unwrap();
    assert_eq!(res.admin, Some(deployment.admin.to_string()));

    let res: OwnerResponse = env
        .app
        .wrap()
        .query_wasm_smart(&deployment.admin, &AdminQueryMsg::Owner {})
        .unwrap();
    assert_eq!(res.owner, env.admin_owner);

    let implementation: ImplementationResponse = env
        .app
        .wrap()
        .query_wasm_smart(&deployment.proxy, &FaucetQueryMsg::Implementation {})
        .unwrap();
    assert_eq!(
        implementation.mode,
        UpgradeMode::Transparent {
            admin: deployment.admin.clone()
        }
    );

    let config: ConfigResponse = env
        .app
        .wrap()
        .query_wasm_smart(&deployment.proxy, &FaucetQueryMsg::Config {})
        .unwrap();
    assert_eq!(config.owner, env.owner);
    assert_eq!(config.cooldown_seconds, 86_400);
}

#[test]
fn test_deploy_reports_addresses() {
    let mut env = setup();
    let msg = deploy_msg(&env, 86_400);

    let res = env
        .app
        .execute(
            env.deployer_owner.clone(),
            WasmMsg::Instantiate {
                admin: None,
                code_id: env.deployer_code_id,
                msg: to_json_binary(&msg).unwrap(),
                funds: vec![],
                label: "deployer".to_string(),
            }
            .into(),
        )
        .unwrap();

    let attr = |key: &str| {
        res.events
            .iter()
            .flat_map(|e| &e.attributes)
            .find(|a| a.key == key)
            .map(|a| a.value.clone())
    };
    let admin = attr("proxy_admin").unwrap();
    let proxy = attr("proxy").unwrap();
    assert_ne!(admin, proxy);

    let info = env.app.wrap().query_wasm_contract_info(&proxy).unwrap();
    assert_eq!(info.admin, Some(admin));
}

#[test]
fn test_deployed_proxy_dispenses_and_upgrades() {
    let mut env = setup();
    let (_, deployment) = deploy(&mut env);
    let user = Addr::unchecked("terra1user");

    env.app
        .send_tokens(
            env.deployer_owner.clone(),
            deployment.proxy.clone(),
            &coins(1_000, DENOM),
        )
        .unwrap();

    env.app
        .execute_contract(
            user.clone(),
            deployment.proxy.clone(),
            &FaucetExecuteMsg::RequestToken {
                asset: AssetInfo::Native {
                    denom: DENOM.to_string(),
                },
            },
            &[],
        )
        .unwrap();
    assert_eq!(
        env.app.wrap().query_balance(&user, DENOM).unwrap().amount,
        Uint128::new(100)
    );

    let new_code_id = env.app.store_code(contract_faucet());
    env.app
        .execute_contract(
            env.admin_owner.clone(),
            deployment.admin.clone(),
            &AdminExecuteMsg::Upgrade {
                proxy: deployment.proxy.to_string(),
                code_id: new_code_id,
            },
            &[],
        )
        .unwrap();

    let info = env
        .app
        .wrap()
        .query_wasm_contract_info(&deployment.proxy)
        .unwrap();
    assert_eq!(info.code_id, new_code_id);
}

#[test]
fn test_deployer_has_no_further_operations() {
    let mut env = setup();
    let (deployer, _) = deploy(&mut env);

    let err = env
        .app
        .execute_contract(env.deployer_owner.clone(), deployer, &Empty {}, &[])
        .unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        deployer::ContractError::AlreadyDeployed.to_string()
    );
}

#[test]
fn test_invalid_faucet_parameters_abort_deployment() {
    let mut env = setup();
    let msg = deploy_msg(&env, 0);

    let err = env
        .app
        .instantiate_contract(
            env.deployer_code_id,
            env.deployer_owner.clone(),
            &msg,
            &[],
            "deployer",
            None,
        )
        .unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        faucet::ContractError::InvalidCooldown.to_string()
    );
}
