use serde::{Deserialize, Serialize};

/// Bedrock edition connection details.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct BedrockInfo {
    pub ip: String,
    pub port: String,
}

/// Minecraft connection details for both editions.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct MinecraftInfo {
    pub java: String,
    pub bedrock: BedrockInfo,
}

/// Community team credits.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct TeamInfo {
    pub creator: String,
    pub owner: String,
}

/// Aggregated connection record for the community.
///
/// The explicit replacement for the ad-hoc global accessor the original
/// markup relied on; anything that needs the connection details takes this
/// record instead of reading globals.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct ServerInfo {
    pub minecraft: MinecraftInfo,
    pub discord: String,
    pub team: TeamInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ServerInfo {
        ServerInfo {
            minecraft: MinecraftInfo {
                java: "cat.fi.freemcserver.net:41600".into(),
                bedrock: BedrockInfo {
                    ip: "cat.fi.freemcserver.net".into(),
                    port: "41600".into(),
                },
            },
            discord: "https://discord.gg/example".into(),
            team: TeamInfo {
                creator: "Ahsan (purple.prime)".into(),
                owner: "Tannej (unknown001010)".into(),
            },
        }
    }

    /// Tests JSON round-tripping of the record.
    ///
    /// Expected: deserializing the serialized record yields an equal value
    #[test]
    fn serializes_and_deserializes() {
        let info = sample();
        let json = serde_json::to_string(&info).unwrap();
        let parsed: ServerInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, info);
    }

    /// Tests the JSON field layout consumed by external tooling.
    ///
    /// Expected: nested minecraft.bedrock.port path present
    #[test]
    fn json_exposes_nested_connection_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["minecraft"]["java"], "cat.fi.freemcserver.net:41600");
        assert_eq!(json["minecraft"]["bedrock"]["port"], "41600");
    }
}
