use super::descriptor::{StandardDescriptor, StandardKind};

pub fn erc20() -> StandardDescriptor {
    StandardDescriptor::new(StandardKind::Erc20, "ERC-20 Token Standard")
        .url("https://eips.ethereum.org/EIPS/eip-20")
        .function("totalSupply", &[], &["uint256"])
        .function("balanceOf", &["address"], &["uint256"])
        .function("transfer", &["address", "uint256"], &["bool"])
        .function("transferFrom", &["address", "address", "uint256"], &["bool"])
        .function("approve", &["address", "uint256"], &["bool"])
        .function("allowance", &["address", "address"], &["uint256"])
        .event(
            "Transfer",
            &[("address", true), ("address", true), ("uint256", false)],
        )
        .event(
            "Approval",
            &[("address", true), ("address", true), ("uint256", false)],
        )
}

pub fn erc721() -> StandardDescriptor {
    StandardDescriptor::new(StandardKind::Erc721, "ERC-721 Non-Fungible Token Standard")
        .url("https://eips.ethereum.org/EIPS/eip-721")
        .function("balanceOf", &["address"], &["uint256"])
        .function("ownerOf", &["uint256"], &["address"])
        .function(
            "safeTransferFrom",
            &["address", "address", "uint256", "bytes"],
            &[],
        )
        .function("safeTransferFrom", &["address", "address", "uint256"], &[])
        .function("transferFrom", &["address", "address", "uint256"], &[])
        .function("approve", &["address", "uint256"], &[])
        .function("setApprovalForAll", &["address", "bool"], &[])
        .function("getApproved", &["uint256"], &["address"])
        .function("isApprovedForAll", &["address", "address"], &["bool"])
        .event(
            "Transfer",
            &[("address", true), ("address", true), ("uint256", true)],
        )
        .event(
            "Approval",
            &[("address", true), ("address", true), ("uint256", true)],
        )
        .event(
            "ApprovalForAll",
            &[("address", true), ("address", true), ("bool", false)],
        )
}

pub fn erc1155() -> StandardDescriptor {
    StandardDescriptor::new(StandardKind::Erc1155, "ERC-1155 Multi Token Standard")
        .url("https://eips.ethereum.org/EIPS/eip-1155")
        .function(
            "safeTransferFrom",
            &["address", "address", "uint256", "uint256", "bytes"],
            &[],
        )
        .function(
            "safeBatchTransferFrom",
            &["address", "address", "uint256[]", "uint256[]", "bytes"],
            &[],
        )
        .function("balanceOf", &["address", "uint256"], &["uint256"])
        .function("balanceOfBatch", &["address[]", "uint256[]"], &["uint256[]"])
        .function("setApprovalForAll", &["address", "bool"], &[])
        .function("isApprovedForAll", &["address", "address"], &["bool"])
        .event(
            "TransferSingle",
            &[
                ("address", true),
                ("address", true),
                ("address", true),
                ("uint256", false),
                ("uint256", false),
            ],
        )
        .event(
            "TransferBatch",
            &[
                ("address", true),
                ("address", true),
                ("address", true),
                ("uint256[]", false),
                ("uint256[]", false),
            ],
        )
        .event(
            "ApprovalForAll",
            &[("address", true), ("address", true), ("bool", false)],
        )
        .event("URI", &[("string", false), ("uint256", true)])
}

pub fn erc777() -> StandardDescriptor {
    StandardDescriptor::new(StandardKind::Erc777, "ERC-777 Token Standard")
        .url("https://eips.ethereum.org/EIPS/eip-777")
        .function("name", &[], &["string"])
        .function("symbol", &[], &["string"])
        .function("granularity", &[], &["uint256"])
        .function("totalSupply", &[], &["uint256"])
        .function("balanceOf", &["address"], &["uint256"])
        .function("send", &["address", "uint256", "bytes"], &[])
        .function("burn", &["uint256", "bytes"], &[])
        .function("isOperatorFor", &["address", "address"], &["bool"])
        .function("authorizeOperator", &["address"], &[])
        .function("revokeOperator", &["address"], &[])
        .function("defaultOperators", &[], &["address[]"])
        .function(
            "operatorSend",
            &["address", "address", "uint256", "bytes", "bytes"],
            &[],
        )
        .function(
            "operatorBurn",
            &["address", "uint256", "bytes", "bytes"],
            &[],
        )
        .event(
            "Sent",
            &[
                ("address", true),
                ("address", true),
                ("address", true),
                ("uint256", false),
                ("bytes", false),
                ("bytes", false),
            ],
        )
        .event(
            "Minted",
            &[
                ("address", true),
                ("address", true),
                ("uint256", false),
                ("bytes", false),
                ("bytes", false),
            ],
        )
        .event(
            "Burned",
            &[
                ("address", true),
                ("address", true),
                ("uint256", false),
                ("bytes", false),
                ("bytes", false),
            ],
        )
        .event("AuthorizedOperator", &[("address", true), ("address", true)])
        .event("RevokedOperator", &[("address", true), ("address", true)])
}

pub fn erc4626() -> StandardDescriptor {
    StandardDescriptor::new(StandardKind::Erc4626, "ERC-4626 Tokenized Vaults")
        .url("https://eips.ethereum.org/EIPS/eip-4626")
        .function("asset", &[], &["address"])
        .function("totalAssets", &[], &["uint256"])
        .function("convertToShares", &["uint256"], &["uint256"])
        .function("convertToAssets", &["uint256"], &["uint256"])
        .function("maxDeposit", &["address"], &["uint256"])
        .function("previewDeposit", &["uint256"], &["uint256"])
        .function("deposit", &["uint256", "address"], &["uint256"])
        .function("maxMint", &["address"], &["uint256"])
        .function("previewMint", &["uint256"], &["uint256"])
        .function("mint", &["uint256", "address"], &["uint256"])
        .function("maxWithdraw", &["address"], &["uint256"])
        .function("previewWithdraw", &["uint256"], &["uint256"])
        .function("withdraw", &["uint256", "address", "address"], &["uint256"])
        .function("maxRedeem", &["address"], &["uint256"])
        .function("previewRedeem", &["uint256"], &["uint256"])
        .function("redeem", &["uint256", "address", "address"], &["uint256"])
        .event(
            "Deposit",
            &[
                ("address", true),
                ("address", true),
                ("uint256", false),
                ("uint256", false),
            ],
        )
        .event(
            "Withdraw",
            &[
                ("address", true),
                ("address", true),
                ("address", true),
                ("uint256", false),
                ("uint256", false),
            ],
        )
}

pub fn erc2981() -> StandardDescriptor {
    StandardDescriptor::new(StandardKind::Erc2981, "ERC-2981 NFT Royalty Standard")
        .url("https://eips.ethereum.org/EIPS/eip-2981")
        .function("royaltyInfo", &["uint256", "uint256"], &["address", "uint256"])
}

pub fn erc165() -> StandardDescriptor {
    StandardDescriptor::new(StandardKind::Erc165, "ERC-165 Standard Interface Detection")
        .url("https://eips.ethereum.org/EIPS/eip-165")
        .function("supportsInterface", &["bytes4"], &["bool"])
}

pub fn erc1820() -> StandardDescriptor {
    StandardDescriptor::new(StandardKind::Erc1820, "ERC-1820 Pseudo-introspection Registry")
        .url("https://eips.ethereum.org/EIPS/eip-1820")
        .function(
            "setInterfaceImplementer",
            &["address", "bytes32", "address"],
            &[],
        )
        .function(
            "getInterfaceImplementer",
            &["address", "bytes32"],
            &["address"],
        )
        .function("interfaceHash", &["string"], &["bytes32"])
        .function("updateERC165Cache", &["address", "bytes4"], &[])
        .function(
            "implementsERC165Interface",
            &["address", "bytes4"],
            &["bool"],
        )
        .function(
            "implementsERC165InterfaceNoCache",
            &["address", "bytes4"],
            &["bool"],
        )
        .function("setManager", &["address", "address"], &[])
        .function("getManager", &["address"], &["address"])
        .event(
            "InterfaceImplementerSet",
            &[("address", true), ("bytes32", true), ("address", true)],
        )
        .event("ManagerChanged", &[("address", true), ("address", true)])
}

pub fn erc1822() -> StandardDescriptor {
    StandardDescriptor::new(StandardKind::Erc1822, "ERC-1822 Universal Upgradeable Proxy Standard")
        .url("https://eips.ethereum.org/EIPS/eip-1822")
        .function("proxiableUUID", &[], &["bytes32"])
}

pub fn ownable() -> StandardDescriptor {
    StandardDescriptor::new(StandardKind::Ownable, "Ownable access control")
        .url("https://docs.openzeppelin.com/contracts/access-control")
        .function("owner", &[], &["address"])
        .function("renounceOwnership", &[], &[])
        .function("transferOwnership", &["address"], &[])
        .event(
            "OwnershipTransferred",
            &[("address", true), ("address", true)],
        )
}

/// Built-in standards in precedence order.
pub fn all() -> Vec<StandardDescriptor> {
    vec![
        erc20(),
        erc721(),
        erc1155(),
        erc777(),
        erc4626(),
        erc2981(),
        erc165(),
        erc1820(),
        erc1822(),
        ownable(),
    ]
}
