use serenity::all::{
    GuildId, PermissionOverwrite, PermissionOverwriteType, Permissions, RoleId, UserId,
};

/// Computes the permission overwrites of a new ticket channel.
///
/// Hides the channel from `@everyone` and opens it to the requesting member and
/// the bot. Staff see the channel through their own role permissions.
///
/// # Arguments
/// - `default_role` - The guild's `@everyone` role
/// - `user` - Member who opened the ticket
/// - `bot` - The bot's own user
///
/// # Returns
/// - `Vec<PermissionOverwrite>` - Overwrites to apply at channel creation
pub fn ticket_overwrites(
    default_role: RoleId,
    user: UserId,
    bot: UserId,
) -> Vec<PermissionOverwrite> {
    vec![
        PermissionOverwrite {
            allow: Permissions::empty(),
            deny: Permissions::VIEW_CHANNEL,
            kind: PermissionOverwriteType::Role(default_role),
        },
        PermissionOverwrite {
            allow: Permissions::VIEW_CHANNEL
                | Permissions::SEND_MESSAGES
                | Permissions::ATTACH_FILES,
            deny: Permissions::empty(),
            kind: PermissionOverwriteType::Member(user),
        },
        PermissionOverwrite {
            allow: Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES,
            deny: Permissions::empty(),
            kind: PermissionOverwriteType::Member(bot),
        },
    ]
}

/// The `@everyone` role shares its id with the guild.
pub fn default_role(guild_id: GuildId) -> RoleId {
    RoleId::new(guild_id.get())
}

/// Whether the overwrites let `target` view the channel.
///
/// Only considers explicit overwrites, which is all a ticket channel relies on.
#[cfg(test)]
pub fn can_view(overwrites: &[PermissionOverwrite], target: PermissionOverwriteType) -> bool {
    overwrites
        .iter()
        .filter(|overwrite| overwrite.kind == target)
        .any(|overwrite| {
            overwrite.allow.contains(Permissions::VIEW_CHANNEL)
                && !overwrite.deny.contains(Permissions::VIEW_CHANNEL)
        })
}
