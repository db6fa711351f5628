//! GraphQL documents for the query client.
//!
//! One document per operation; field sets match the entity types in
//! [`super::entities`]. The token-login mutation aliases its root field to
//! `login` so both login flavors decode into the same shape.

pub const LOGIN_USER_PW: &str = "\
mutation ($usernameOrEmail: String!, $password: String!) {
  login(usernameOrEmail: $usernameOrEmail, password: $password, deviceType: WEB) {
    authToken
    user {
      id
      activated
      moderator
      username
      displayName
      plus { expireAt cancelled icon coins type }
      creator { allowSubscriptions datasetTags }
      profile { id firstName lastName description gender birthday photoUri }
      email { address verified }
    }
    usage { generator }
    settings { personalRoomOrder favoriteRoomIds favoriteEmojis }
  }
  welcome {
    webVersion
    announcement { date title emojis content textColor }
  }
}";

pub const LOGIN_AUTH_TOKEN: &str = "\
mutation ($authToken: String!, $action: String) {
  login: loginWithToken(authToken: $authToken, action: $action, deviceType: WEB) {
    authToken
    user {
      id
      activated
      moderator
      username
      displayName
      plus { expireAt cancelled icon coins type }
      creator { allowSubscriptions datasetTags }
      profile { id firstName lastName description gender birthday photoUri }
      email { address verified }
    }
    usage { generator }
    settings { personalRoomOrder favoriteRoomIds favoriteEmojis }
  }
  welcome {
    webVersion
    announcement { date title emojis content textColor }
  }
}";

pub const AI_TRAINER_GROUP: &str = "\
query ($aiTrainerGroupId: ID!) {
  aiTrainerGroup(aiTrainerGroupId: $aiTrainerGroupId) {
    id
    name
    count
    deleted
    description
    documents { id order title content queueStatus queuedAt builtAt createdAt updatedAt }
    dominantColors
    kudos { id upvoted upvotes comments }
    nsfw
    personalities
    petSpeciesIds
    price
    profilePhotoUri
    purchased
    status
    tags
    updatedAt
    user { id username displayName }
  }
}";

pub const DATASET_LINES: &str = "\
query ($aiTrainerGroupId: ID!, $searchQuery: String, $limit: Int!, $offset: Int!) {
  datasetLines(aiTrainerGroupId: $aiTrainerGroupId, searchQuery: $searchQuery, limit: $limit, offset: $offset) {
    id
    userMessage
    message
    asm
    endearment
    recent
    time
    deleted
    history
    aiTrainerGroupId
  }
}";

pub const ADD_TO_DATASET: &str = "\
mutation ($aiTrainerGroupId: ID!, $editorType: String!, $generateResults: Boolean!, $dialogues: [AiDialogueInput]!) {
  addToDataset(aiTrainerGroupId: $aiTrainerGroupId, editorType: $editorType, generateResults: $generateResults, dialogues: $dialogues) {
    added { id userMessage message asm endearment recent time deleted history aiTrainerGroupId }
    aiTrainerGroupId
    count
    deletedIds
    generated { id userMessage message asm endearment recent time deleted history aiTrainerGroupId }
    message
    messageType
  }
}";

pub const CHAT_ROOM: &str = "\
query ($chatRoomId: ID!) {
  chatRoom(chatRoomId: $chatRoomId) {
    id
    roomVersionNumber
    isPreviewRoom
    pet {
      id
      chatRoomId
      petSpeciesId
      kajiId
      ownerId
      ownerDisplayName
      ownerProfilePhotoUri
      name
      kajiName
      gender
      persona
      stage
      state
      mood
      statusPhotoUri
      dominantColors
      statusMessage
    }
  }
}";

pub const CHAT_ROOM_HISTORY: &str = "\
query ($chatRoomId: ID!, $oldestTime: Float!) {
  chatRoomHistory(chatRoomId: $chatRoomId, oldestTime: $oldestTime) {
    id
    chatRoomId
    userId
    message
    attachmentUri
    displayName
    profilePhotoUri
    createdAt
  }
}";
